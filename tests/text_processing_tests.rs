#[cfg(test)]
mod tests {
    use pantry::text_processing::{char_len, normalize_ingredient, split_words};

    #[test]
    fn test_recipe_lines_with_units() {
        assert_eq!(normalize_ingredient("200g carne macinata"), "carne macinata");
        assert_eq!(normalize_ingredient("500 ml. Latte"), "latte");
        assert_eq!(normalize_ingredient("10kg patate"), "patate");
        assert_eq!(normalize_ingredient("3 Tbsp. Olive Oil"), "olive oil");
        assert_eq!(normalize_ingredient("1 teaspoon cinnamon"), "cinnamon");
        assert_eq!(normalize_ingredient("2 cup flour"), "flour");
    }

    #[test]
    fn test_fraction_and_unit() {
        // "1/2" loses its slash first and reads as a single number
        assert_eq!(normalize_ingredient("1/2 cup flour"), "flour");
    }

    #[test]
    fn test_unit_must_be_whole_word() {
        assert_eq!(normalize_ingredient("2 lemons"), "lemons");
        assert_eq!(normalize_ingredient("4 gamberi"), "gamberi");
        assert_eq!(normalize_ingredient("1 lb"), "");
    }

    #[test]
    fn test_unit_without_number_is_kept() {
        assert_eq!(normalize_ingredient("kg patate"), "kg patate");
    }

    #[test]
    fn test_only_leading_quantity_is_stripped() {
        assert_eq!(normalize_ingredient("farina 00"), "farina 00");
        assert_eq!(normalize_ingredient("Uova x 2"), "uova x 2");
    }

    #[test]
    fn test_text_without_quantity() {
        assert_eq!(normalize_ingredient("  Spicchio d'aglio  "), "spicchio daglio");
        assert_eq!(normalize_ingredient("Caffè"), "caffè");
        assert_eq!(normalize_ingredient("pomodori,\tpelati"), "pomodori pelati");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(normalize_ingredient(""), "");
        assert_eq!(normalize_ingredient("   "), "");
        assert_eq!(normalize_ingredient("!!!"), "");
        assert_eq!(normalize_ingredient("100"), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for line in [
            "200g Carne Macinata",
            "1/2 cup flour",
            "Mozzarella di bufala",
            "2 lemons",
            "sale q.b.",
        ] {
            let once = normalize_ingredient(line);
            assert_eq!(normalize_ingredient(&once), once, "line: {}", line);
        }
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("mozzarella di bufala"),
            vec!["mozzarella", "di", "bufala"]
        );
        assert!(split_words("").is_empty());
        assert_eq!(char_len("caffè"), 5);
    }
}
