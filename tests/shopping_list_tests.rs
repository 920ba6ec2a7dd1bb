#[cfg(test)]
mod tests {
    use recipe_scanner::recipe_parser::{parse_recipe_text, RecipeParser, SequentialIdGenerator};
    use recipe_scanner::shopping_list::ShoppingList;

    #[test]
    fn test_parsed_ingredients_flow_onto_the_list() {
        let ingredients = parse_recipe_text("2 cups flour\n1 tsp salt\na pinch of pepper");
        let mut list = ShoppingList::new();

        let added = list.add_ingredients(&ingredients);

        assert_eq!(added, 3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.items()[0].name, "flour");
        assert_eq!(list.items()[2].name, "pepper");
    }

    #[test]
    fn test_rescanning_the_same_recipe_adds_nothing() {
        let mut parser = RecipeParser::with_id_generator(SequentialIdGenerator::default());
        let first = parser.parse("2 cups flour\n1 tsp salt");
        let second = parser.parse("2 cups flour\n1 tsp salt");

        let mut list = ShoppingList::new();
        assert_eq!(list.add_ingredients(&first), 2);
        // Same names, fresh ids: dedup is by name, not identity.
        assert_eq!(list.add_ingredients(&second), 0);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_dedup_ignores_name_casing() {
        let mut list = ShoppingList::new();
        list.add_ingredients(&parse_recipe_text("Fresh Basil"));
        assert_eq!(list.add_ingredients(&parse_recipe_text("fresh basil")), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_check_remove_lifecycle() {
        let mut parser = RecipeParser::with_id_generator(SequentialIdGenerator::default());
        let mut list = ShoppingList::new();
        list.add_ingredients(&parser.parse("2 cups flour\n1 tsp salt\nolive oil"));

        list.toggle_checked("item-1");
        list.toggle_checked("item-3");
        assert_eq!(list.stats().checked, 2);
        assert_eq!(list.stats().remaining, 1);

        assert_eq!(list.remove_checked(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].name, "salt");

        assert!(list.remove("item-2"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_records_are_not_mutated_on_add() {
        let ingredients = parse_recipe_text("2 cups flour");
        let original = ingredients[0].clone();

        let mut list = ShoppingList::new();
        list.add_ingredients(&ingredients);

        assert_eq!(ingredients[0], original);
        assert_eq!(list.items()[0], original);
    }
}
