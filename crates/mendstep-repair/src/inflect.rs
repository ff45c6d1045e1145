//! Naive English inflection helpers.
//!
//! Just enough to turn a URL slug into a handler or model name and back.
//! Not a general inflector: irregular nouns ("people", "geese") are out of
//! scope, matching what the step vocabulary actually needs.

/// Pluralize a lowercase word: `widget` → `widgets`, `party` → `parties`,
/// `box` → `boxes`.
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y')
        && !stem.is_empty()
        && !ends_with_vowel(stem)
    {
        return format!("{stem}ies");
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Singularize a lowercase word: `widgets` → `widget`, `parties` →
/// `party`, `boxes` → `box`.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es")
        && ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| stem.ends_with(suffix))
    {
        return stem.to_string();
    }
    if let Some(stem) = word.strip_suffix('s')
        && !stem.is_empty()
    {
        return stem.to_string();
    }
    word.to_string()
}

/// Turn an underscored word into CamelCase: `blog_post` → `BlogPost`.
pub fn camelize(word: &str) -> String {
    word.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Turn a CamelCase name into underscored form: `BlogPost` → `blog_post`.
pub fn underscore(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    for (i, ch) in word.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Derive a model name from a plural slug: `widgets` → `Widget`,
/// `blog_posts` → `BlogPost`.
pub fn classify(slug: &str) -> String {
    camelize(&singularize(slug))
}

/// Derive a table name from a model name: `Widget` → `widgets`,
/// `BlogPost` → `blog_posts`.
pub fn tableize(model: &str) -> String {
    pluralize(&underscore(model))
}

fn ends_with_vowel(word: &str) -> bool {
    matches!(word.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}
