use super::value_objects::ChartColor;
use std::collections::HashMap;

/// Category → palette colour, assigned by position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryColors {
    colors: HashMap<String, ChartColor>,
}

impl CategoryColors {
    /// `palette[index % palette.len()]` for every category; an empty palette maps nothing.
    pub fn construct(categories: &[String], palette: &[ChartColor]) -> Self {
        let colors = if palette.is_empty() {
            HashMap::new()
        } else {
            categories
                .iter()
                .enumerate()
                .map(|(index, category)| (category.clone(), palette[index % palette.len()]))
                .collect()
        };
        Self { colors }
    }

    pub fn get(&self, category: &str) -> Option<ChartColor> {
        self.colors.get(category).copied()
    }

    /// Colour of a category, neutral gray on a miss.
    pub fn color_for(&self, category: &str) -> ChartColor {
        self.get(category).unwrap_or(ChartColor::FALLBACK)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wraps_around_the_palette() {
        let palette = [ChartColor::Blue, ChartColor::Pink];
        let colors = CategoryColors::construct(&names(&["a", "b", "c"]), &palette);
        assert_eq!(colors.color_for("a"), ChartColor::Blue);
        assert_eq!(colors.color_for("b"), ChartColor::Pink);
        assert_eq!(colors.color_for("c"), ChartColor::Blue);
    }

    #[test]
    fn misses_fall_back_to_gray() {
        let colors = CategoryColors::construct(&names(&["a"]), &[]);
        assert!(colors.is_empty());
        assert_eq!(colors.color_for("a"), ChartColor::Gray);
    }
}
