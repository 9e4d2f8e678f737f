use log::debug;

use super::{
    INGREDIENT_AMOUNT_CLASS, INGREDIENT_NAME_CLASS, INGREDIENT_NOTES_CLASS, INGREDIENT_UNIT_CLASS,
};
use crate::dom::{find_first, get_element_with_class, has_tag_and_class, text_content, DomNode};
use crate::error::ParseError;
use crate::model::Ingredient;

/// Names of the ingredients in an ingredient list.
///
/// Looks at the direct children of every list item for a
/// `span.wprm-recipe-ingredient-name` and reads its first non-blank text
/// node.
pub fn ingredient_names<N: DomNode>(list: N) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::new();
    for item in list.children() {
        for child in item.children() {
            if has_tag_and_class(child, "span", INGREDIENT_NAME_CLASS) {
                names.push(first_text(child)?);
            }
        }
    }
    Ok(names)
}

/// Structured ingredients of an ingredient list, one per `li` carrying a
/// name span. Items without a name span are skipped.
pub fn ingredients<N: DomNode>(list: N) -> Result<Vec<Ingredient>, ParseError> {
    let mut ingredients = Vec::new();

    for item in list.children().filter(|node| node.is_element("li")) {
        let Some(name_span) = get_element_with_class(item, "span", INGREDIENT_NAME_CLASS) else {
            debug!("Skipping ingredient list item without a name");
            continue;
        };

        let name = text_content(name_span);
        if name.is_empty() {
            return Err(ParseError::MalformedAssumption(
                "ingredient name span has no text".to_string(),
            ));
        }

        ingredients.push(Ingredient {
            amount: span_text(item, INGREDIENT_AMOUNT_CLASS),
            unit: span_text(item, INGREDIENT_UNIT_CLASS),
            name,
            notes: span_text(item, INGREDIENT_NOTES_CLASS),
        });
    }

    Ok(ingredients)
}

fn first_text<N: DomNode>(span: N) -> Result<String, ParseError> {
    if span.first_child().is_none() {
        return Err(ParseError::MalformedAssumption(
            "ingredient name span has no children".to_string(),
        ));
    }
    find_first(span, |node| node.text().is_some_and(|text| !text.trim().is_empty()))
        .and_then(|node| node.text().map(|text| text.trim().to_string()))
        .ok_or_else(|| {
            ParseError::MalformedAssumption("ingredient name span has no text node".to_string())
        })
}

fn span_text<N: DomNode>(item: N, class: &str) -> Option<String> {
    get_element_with_class(item, "span", class)
        .map(text_content)
        .filter(|text| !text.is_empty())
}
