use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// A schema identifier broken into snake-case parts, convertible to the case
/// styles generated code needs.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake.split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    pub fn upper_snake_case(&self) -> String {
        self.snake_case().to_shouty_snake_case()
    }
}

/// Plural form of a word, e.g. `film` to `films`.
pub fn pluralize(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Singular form of a word, e.g. `films` to `film`.
pub fn singularize(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}
