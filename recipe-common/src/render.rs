//! Recipe list container
//!
//! [`RecipeList`] is the single display surface of a session. Every
//! [`RecipeList::render`] call replaces the whole content: either one
//! card per recipe, or one "no results" notice when there is nothing
//! to show. Front ends read the nodes back (terminal drawing) or
//! serialize them with [`RecipeList::to_html`].

use tracing::debug;

use crate::model::Recipe;

/// Status messages shown in place of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Initial fetch still in flight
    Loading,
    /// Empty result set (API returned nothing or the filter matched nothing)
    NoResults,
    /// Initial fetch failed; search stays disabled
    LoadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Loading => "Loading recipes...",
            Notice::NoResults => "No recipes found.",
            Notice::LoadFailed => "Failed to load recipes. Please try again later.",
        }
    }
}

/// One displayed recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub name: String,
    pub category: String,
    pub image: String,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            image: recipe.image.clone(),
        }
    }
}

impl RecipeCard {
    fn write_html(&self, out: &mut String) {
        let name = escape_html(&self.name);
        out.push_str("<div class=\"recipe-card\">");
        out.push_str(&format!("<h3>{name}</h3>"));
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{name}\" width=\"70\">",
            escape_html(&self.image)
        ));
        out.push_str(&format!(
            "<p><strong>Category:</strong> {}</p>",
            escape_html(&self.category)
        ));
        out.push_str("</div>");
    }
}

/// Content node of the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Notice(Notice),
    Card(RecipeCard),
}

/// The recipe list display container
#[derive(Debug, Default)]
pub struct RecipeList {
    nodes: Vec<Node>,
}

impl RecipeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with one card per recipe, in order
    ///
    /// An empty sequence shows the [`Notice::NoResults`] notice instead.
    pub fn render<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        self.nodes.clear();
        self.nodes
            .extend(records.into_iter().map(|r| Node::Card(RecipeCard::from(r))));

        if self.nodes.is_empty() {
            self.nodes.push(Node::Notice(Notice::NoResults));
        }

        debug!(cards = self.card_count(), "Rendered recipe list");
    }

    /// Replace the content with a single status notice
    pub fn show_notice(&mut self, notice: Notice) {
        self.nodes.clear();
        self.nodes.push(Node::Notice(notice));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cards(&self) -> impl Iterator<Item = &RecipeCard> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Card(card) => Some(card),
            Node::Notice(_) => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// The notice currently shown, if the container holds one
    pub fn notice(&self) -> Option<Notice> {
        self.nodes.iter().find_map(|node| match node {
            Node::Notice(notice) => Some(*notice),
            Node::Card(_) => None,
        })
    }

    /// Serialize the container content as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();

        for node in &self.nodes {
            match node {
                Node::Notice(notice) => {
                    out.push_str(&format!("<p>{}</p>", escape_html(notice.message())));
                }
                Node::Card(card) => card.write_html(&mut out),
            }
        }

        out
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
