//! Finders and extractors for WP Recipe Maker (WPRM) recipe cards.
//!
//! WPRM tags every part of a recipe card with a fixed class name. The
//! finders here are predicate bindings over [`crate::dom`]; class values are
//! compared as whole strings, so an element whose `class` attribute carries
//! extra tokens is not recognised.

use log::debug;

use crate::dom::{
    get_element_with_class, has_tag_and_class, text_content, traverse, DomNode, Visit,
};
use crate::error::{ListKind, ParseError};
use crate::model::Recipe;

mod ingredients;
mod instructions;
mod print;

pub use ingredients::{ingredient_names, ingredients};
pub use instructions::instruction_steps;
pub use print::{print_ingredient_list, print_node};

pub const RECIPE_CONTAINER_CLASS: &str = "wprm-recipe-container";
pub const RECIPE_NAME_CLASS: &str = "wprm-recipe-name";
pub const INGREDIENTS_CLASS: &str = "wprm-recipe-ingredients";
pub const INGREDIENT_AMOUNT_CLASS: &str = "wprm-recipe-ingredient-amount";
pub const INGREDIENT_UNIT_CLASS: &str = "wprm-recipe-ingredient-unit";
pub const INGREDIENT_NAME_CLASS: &str = "wprm-recipe-ingredient-name";
pub const INGREDIENT_NOTES_CLASS: &str = "wprm-recipe-ingredient-notes";
pub const INSTRUCTIONS_CLASS: &str = "wprm-recipe-instructions";
pub const INSTRUCTION_TEXT_CLASS: &str = "wprm-recipe-instruction-text";

/// First `ul.wprm-recipe-ingredients` in pre-order
pub fn find_ingredient_list<N: DomNode>(root: N) -> Result<N, ParseError> {
    get_element_with_class(root, "ul", INGREDIENTS_CLASS)
        .ok_or(ParseError::ListNotFound(ListKind::Ingredients))
}

/// First `ul.wprm-recipe-instructions` in pre-order
pub fn find_instructions_list<N: DomNode>(root: N) -> Result<N, ParseError> {
    get_element_with_class(root, "ul", INSTRUCTIONS_CLASS)
        .ok_or(ParseError::ListNotFound(ListKind::Instructions))
}

/// First `div.wprm-recipe-container` in pre-order
pub fn find_recipe_card<N: DomNode>(root: N) -> Result<N, ParseError> {
    get_element_with_class(root, "div", RECIPE_CONTAINER_CLASS)
        .ok_or(ParseError::RecipeCardNotFound)
}

/// Every ingredient list in the document, outermost matches only
pub fn find_ingredient_lists<N: DomNode>(root: N) -> Vec<N> {
    find_outermost(root, "ul", INGREDIENTS_CLASS)
}

/// Every instructions list in the document, outermost matches only
pub fn find_instructions_lists<N: DomNode>(root: N) -> Vec<N> {
    find_outermost(root, "ul", INSTRUCTIONS_CLASS)
}

// A match ends the walk below it, so lists nested in a matched list are not
// reported twice.
fn find_outermost<N: DomNode>(root: N, tag: &str, class: &str) -> Vec<N> {
    traverse(root, |node| {
        if has_tag_and_class(node, tag, class) {
            Visit::keep_and_stop()
        } else {
            Visit::descend()
        }
    })
}

/// Build a [`Recipe`] from the recipe card under `root`.
///
/// Without a recipe card the whole tree is searched. At least one ingredient
/// list is required; a missing instructions list leaves the steps empty.
///
/// The name is read from an `h2` whose class is exactly `wprm-recipe-name`.
/// Templates that add more classes to the title, such as
/// `class="wprm-recipe-name wprm-block-text-bold"`, leave `name` as `None`.
pub fn extract_recipe<N: DomNode>(root: N) -> Result<Recipe, ParseError> {
    let card = match find_recipe_card(root) {
        Ok(card) => card,
        Err(err) => {
            debug!("{err}, searching the whole document");
            root
        }
    };

    let name = get_element_with_class(card, "h2", RECIPE_NAME_CLASS)
        .map(text_content)
        .filter(|name| !name.is_empty());

    let lists = find_ingredient_lists(card);
    if lists.is_empty() {
        return Err(ParseError::ListNotFound(ListKind::Ingredients));
    }
    let mut all_ingredients = Vec::new();
    for list in lists {
        all_ingredients.extend(ingredients(list)?);
    }

    let instruction_lists = find_instructions_lists(card);
    if instruction_lists.is_empty() {
        debug!("{}", ParseError::ListNotFound(ListKind::Instructions));
    }
    let instructions: Vec<String> = instruction_lists
        .into_iter()
        .flat_map(instruction_steps)
        .collect();

    debug!(
        "Extracted {} ingredients and {} instructions",
        all_ingredients.len(),
        instructions.len()
    );

    Ok(Recipe {
        name,
        ingredients: all_ingredients,
        instructions,
        source_url: None,
    })
}
