//! Narrative composer: prose from a constructed prompt.
//!
//! Generation itself is delegated to an external text-generation service
//! ([`GeminiClient`]). This module owns only the prompt templates and the
//! post-processing of generated text.

mod error;
mod gemini;
#[cfg(test)]
pub(crate) mod mock;

use std::future::Future;

pub use error::NarrativeError;
pub use gemini::{GeminiClient, GeminiConfig};

/// Turns a prompt into generated prose.
pub trait NarrativeComposer: Send + Sync {
    fn compose(&self, prompt: &str) -> impl Future<Output = Result<String, NarrativeError>> + Send;
}

/// Prompt asking for a one-paragraph profile of a transport operator.
pub fn operator_prompt(operator: &str) -> String {
    format!("Give me some facts about {operator} transport operator in one paragraph")
}

/// Prompt asking for a tourism guide along a route of named stops.
pub fn guide_prompt(stop_names: &[String]) -> String {
    let route = stop_names.join(", ");
    format!(
        "Generate a tourism guide for {route} travel route using Germany railway \
         using \"-\" as bullet point. \n\
         The format is :\n\
         Tourism Guide for {route} travel route \n\
         Stop name \n\
         -Points of Interest: \n\
         List points of interest and their descriptions \n\
         -Restaurants: \n\
         List recommended restaurants and their addresses \n\
         -Accommodations: \n\
         List recommended accommodations and their addresses \n\
         Repeat for other stops \n\
         Other points of interest along the route (if exists) \n\
         List other points of interest and their descriptions if exists \n\
         Transportations \n\
         List transportation options for visiting points of interest from stations"
    )
}

/// Remove markdown emphasis and heading markers (`*`, `#`).
pub fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '#')).collect()
}
