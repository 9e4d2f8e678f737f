use super::INSTRUCTION_TEXT_CLASS;
use crate::dom::{get_element_with_class, text_content, DomNode};

/// Step texts of an instructions list, in document order.
///
/// Each `li` contributes the text of its `div.wprm-recipe-instruction-text`,
/// or its own text when that div is missing. Empty steps are dropped.
pub fn instruction_steps<N: DomNode>(list: N) -> Vec<String> {
    list.children()
        .filter(|node| node.is_element("li"))
        .map(|item| {
            let target =
                get_element_with_class(item, "div", INSTRUCTION_TEXT_CLASS).unwrap_or(item);
            text_content(target)
        })
        .filter(|step| !step.is_empty())
        .collect()
}
