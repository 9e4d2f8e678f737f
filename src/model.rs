use serde::Serialize;

/// One line of a WPRM ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    /// Ingredient with only a name, as `print_ingredient_list` reports it
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            amount: None,
            unit: None,
            name: name.into(),
            notes: None,
        }
    }

    /// Human readable line, e.g. `2 cups flour (sifted)`
    pub fn to_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(amount) = &self.amount {
            parts.push(amount);
        }
        if let Some(unit) = &self.unit {
            parts.push(unit);
        }
        parts.push(&self.name);

        let mut line = parts.join(" ");
        if let Some(notes) = &self.notes {
            line.push_str(&format!(" ({notes})"));
        }
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Recipe {
    /// Plain text rendering: title, one ingredient per line, numbered steps
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        if let Some(name) = &self.name {
            output.push_str(&format!("# {name}\n\n"));
        }

        for ingredient in &self.ingredients {
            output.push_str(&ingredient.to_line());
            output.push('\n');
        }

        if !self.instructions.is_empty() {
            output.push('\n');
            for (i, step) in self.instructions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, step));
            }
        }

        output
    }
}
