use std::io::Write;

use super::ingredient_names;
use crate::dom::{DomNode, NodeKind};
use crate::error::ParseError;

/// Write a debugging dump of one node: its kind, tag or text, and attributes
pub fn print_node<N: DomNode, W: Write>(out: &mut W, node: N) -> Result<(), ParseError> {
    let kind = match node.kind() {
        NodeKind::Element => "Element",
        NodeKind::Text => "Text",
        NodeKind::Other => "Other",
    };
    writeln!(out, "Node Type: {kind}")?;

    let data = node.tag_name().or_else(|| node.text()).unwrap_or_default();
    writeln!(out, "Node Data: {data}")?;

    writeln!(out, "Node Attributes")?;
    for (key, value) in node.attributes() {
        writeln!(out, "{key} {value}")?;
    }
    Ok(())
}

/// Write each ingredient name of an ingredient list on its own line
pub fn print_ingredient_list<N: DomNode, W: Write>(out: &mut W, list: N) -> Result<(), ParseError> {
    for name in ingredient_names(list)? {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{document_root, get_text_node};
    use crate::wprm::{find_ingredient_list, find_recipe_card};
    use scraper::Html;

    #[test]
    fn test_print_node_element() {
        let document = Html::parse_document(
            r#"<div class="wprm-recipe-container" data-recipe-id="42"></div>"#,
        );
        let card = find_recipe_card(document_root(&document)).unwrap();

        let mut out = Vec::new();
        print_node(&mut out, card).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert!(printed.starts_with("Node Type: Element\nNode Data: div\nNode Attributes\n"));
        assert!(printed.contains("class wprm-recipe-container\n"));
        assert!(printed.contains("data-recipe-id 42\n"));
    }

    #[test]
    fn test_print_node_text_and_document() {
        let document = Html::parse_document("<p>Hello</p>");
        let root = document_root(&document);

        let mut out = Vec::new();
        print_node(&mut out, get_text_node(root).unwrap()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Node Type: Text\nNode Data: Hello\nNode Attributes\n"
        );

        let mut out = Vec::new();
        print_node(&mut out, root).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Node Type: Other\nNode Data: \nNode Attributes\n"
        );
    }

    #[test]
    fn test_print_ingredient_list() {
        let document = Html::parse_document(
            r#"<ul class="wprm-recipe-ingredients">
                <li><span class="wprm-recipe-ingredient-name">Butter</span></li>
                <li><span class="wprm-recipe-ingredient-name">Sugar</span></li>
            </ul>"#,
        );
        let list = find_ingredient_list(document_root(&document)).unwrap();

        let mut out = Vec::new();
        print_ingredient_list(&mut out, list).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Butter\nSugar\n");
    }
}
