/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::render::{Element, Node};
use bibhtml_core::{Person, RenderConfig};

/// Render an author list as `<span class="authors">`.
///
/// Each author gets a `<span class="author">` (plus `highlight` for the
/// configured author) holding the initials-collapsed name, linked to the
/// author's homepage when one is configured. Separators follow the config:
/// nothing before the first author, `separators.last` before the last one,
/// `separators.between` before all others.
pub fn format_authors(authors: &[Person], config: &RenderConfig) -> Node {
    let count = authors.len();
    let mut children = Vec::with_capacity(count * 2);

    for (i, person) in authors.iter().enumerate() {
        if i > 0 {
            let sep = if i + 1 == count {
                &config.separators.last
            } else {
                &config.separators.between
            };
            children.push(Node::text(sep.as_str()));
        }
        children.push(format_author(person, config));
    }

    Node::span("authors", children)
}

fn format_author(person: &Person, config: &RenderConfig) -> Node {
    let name = Node::text(person.display_name());
    let homepage = person
        .lookup_key()
        .filter(|_| config.link_authors)
        .and_then(|key| config.homepage(&key).map(str::to_string));

    let content = match homepage {
        Some(url) => Node::link(&url, vec![name]),
        None => name,
    };

    let mut wrapper = Element::new("span").with_class("author");
    if config.is_highlighted(person) {
        wrapper = wrapper.with_class("highlight");
    }
    wrapper.with_children(vec![content]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibhtml_core::HighlightedAuthor;

    fn people(names: &[(&str, &str)]) -> Vec<Person> {
        names.iter().map(|(g, f)| Person::new(g, f)).collect()
    }

    fn separators(node: &Node) -> Vec<String> {
        node.as_element()
            .unwrap()
            .children
            .iter()
            .filter_map(|c| match c {
                Node::Text(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_author_has_no_separator() {
        let node = format_authors(&people(&[("Jane", "Doe")]), &RenderConfig::default());
        assert!(separators(&node).is_empty());
        assert_eq!(node.text_content(), "J. Doe");
    }

    #[test]
    fn test_two_authors_joined_with_and() {
        let node = format_authors(
            &people(&[("Richard", "Mortier"), ("Ada", "Lovelace")]),
            &RenderConfig::default(),
        );
        assert_eq!(separators(&node), vec![" and "]);
        assert_eq!(node.text_content(), "R. Mortier and A. Lovelace");
    }

    #[test]
    fn test_many_authors_separator_count() {
        let authors = people(&[("A", "One"), ("B", "Two"), ("C", "Three"), ("D", "Four")]);
        let node = format_authors(&authors, &RenderConfig::default());
        let seps = separators(&node);
        assert_eq!(seps.len(), 3);
        assert_eq!(seps, vec![", ", ", ", " and "]);
        assert_eq!(node.text_content(), "A. One, B. Two, C. Three and D. Four");
    }

    #[test]
    fn test_highlight_marker_only_on_configured_author() {
        let config = RenderConfig {
            highlight: Some(HighlightedAuthor::new("Richard", "Mortier")),
            ..Default::default()
        };
        let node = format_authors(&people(&[("Richard", "Mortier"), ("Ada", "Lovelace")]), &config);
        let authors: Vec<&Element> = node
            .as_element()
            .unwrap()
            .children
            .iter()
            .filter_map(Node::as_element)
            .collect();
        assert!(authors[0].has_class("highlight"));
        assert!(!authors[1].has_class("highlight"));
        assert!(authors[1].has_class("author"));
    }

    #[test]
    fn test_homepage_link() {
        let mut config = RenderConfig::default();
        config
            .homepages
            .insert("A Lovelace".to_string(), "https://example.org/ada".to_string());
        let node = format_authors(&people(&[("Richard", "Mortier"), ("Ada", "Lovelace")]), &config);
        let root = node.as_element().unwrap();
        let link = root.children[2].as_element().unwrap().children[0]
            .as_element()
            .unwrap();
        assert_eq!(link.tag, "a");
        assert_eq!(link.attr("href"), Some("https://example.org/ada"));
        assert_eq!(link.text_content(), "A. Lovelace");

        config.link_authors = false;
        let node = format_authors(&people(&[("Ada", "Lovelace")]), &config);
        assert!(node.as_element().unwrap().find_class("author").unwrap().children[0]
            .as_element()
            .is_none());
    }

    #[test]
    fn test_homepage_key_is_case_sensitive() {
        let mut config = RenderConfig::default();
        config
            .homepages
            .insert("a lovelace".to_string(), "https://example.org/ada".to_string());
        let node = format_authors(&people(&[("Ada", "Lovelace")]), &config);
        let author = node.as_element().unwrap().find_class("author").unwrap();
        assert!(matches!(author.children[0], Node::Text(_)));
    }

    #[test]
    fn test_initial_is_first_letter() {
        let node = format_authors(&people(&[("Richard", "Mortier")]), &RenderConfig::default());
        assert!(node.text_content().starts_with("R."));
    }

    #[test]
    fn test_formatting_twice_is_identical() {
        let authors = people(&[("Richard", "Mortier"), ("Ada", "Lovelace")]);
        let config = RenderConfig::default();
        let first = format_authors(&authors, &config);
        let second = format_authors(&authors, &config);
        assert_eq!(first, second);
        assert_eq!(authors[0].given, vec!["Richard"]);
    }
}
