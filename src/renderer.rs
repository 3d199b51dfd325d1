pub mod vars;

use crate::error::InfraError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Matches `#{name}` placeholders.
static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\{([A-Za-z0-9_.]+)\}").expect("valid placeholder regex"));

/// Placeholder values for a single render.
#[derive(Debug, Default, Clone)]
pub struct RenderVars {
    pub values: HashMap<String, String>,
}

impl RenderVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// What to do when a placeholder has no value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingVarPolicy {
    /// Leave the original token text: `#{name}`
    #[default]
    LeaveToken,
    /// Render as empty string
    Empty,
}

/// The pages the game knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    NewPlayer,
    Room,
    Error,
}

impl Template {
    pub fn file_name(&self) -> &'static str {
        match self {
            Template::NewPlayer => "new-player.html",
            Template::Room => "room.html",
            Template::Error => "error.html",
        }
    }
}

/// Turns a named template plus placeholder values into HTML. Game logic only
/// talks to this trait, so the substitution strategy can be replaced.
pub trait Render: Send + Sync {
    fn render(&self, template: Template, vars: &RenderVars) -> String;
}

/// Template sources, one per [`Template`].
#[derive(Debug, Clone)]
pub struct Templates {
    new_player: String,
    room: String,
    error: String,
}

impl Templates {
    /// The templates compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            new_player: include_str!("../views/new-player.html").to_string(),
            room: include_str!("../views/room.html").to_string(),
            error: include_str!("../views/error.html").to_string(),
        }
    }

    /// Reads all templates from `dir`. Every file must be present.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, InfraError> {
        let dir = dir.as_ref();
        let read = |t: Template| std::fs::read_to_string(dir.join(t.file_name()));

        Ok(Self {
            new_player: read(Template::NewPlayer)?,
            room: read(Template::Room)?,
            error: read(Template::Error)?,
        })
    }

    pub fn source(&self, template: Template) -> &str {
        match template {
            Template::NewPlayer => &self.new_player,
            Template::Room => &self.room,
            Template::Error => &self.error,
        }
    }
}

/// Plain `#{name}` substitution without any escaping.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    templates: Templates,
    missing_var: MissingVarPolicy,
}

impl TemplateRenderer {
    pub fn new(templates: Templates) -> Self {
        Self {
            templates,
            missing_var: MissingVarPolicy::default(),
        }
    }

    pub fn with_missing_var(mut self, policy: MissingVarPolicy) -> Self {
        self.missing_var = policy;
        self
    }
}

impl Render for TemplateRenderer {
    fn render(&self, template: Template, vars: &RenderVars) -> String {
        render_template_with_opts(self.templates.source(template), vars, self.missing_var)
    }
}

/// Public API: render a template, leaving unknown placeholders in place.
pub fn render_template(template: &str, vars: &RenderVars) -> String {
    render_template_with_opts(template, vars, MissingVarPolicy::LeaveToken)
}

/// Replaces every placeholder in a single pass. Values are inserted verbatim
/// and never expanded again, even when they contain `#{...}` themselves.
pub fn render_template_with_opts(template: &str, vars: &RenderVars, missing_var: MissingVarPolicy) -> String {
    VAR_RE
        .replace_all(template, |caps: &regex::Captures| match vars.get(&caps[1]) {
            Some(val) => val.to_string(),
            None => match missing_var {
                MissingVarPolicy::LeaveToken => caps[0].to_string(),
                MissingVarPolicy::Empty => String::new(),
            },
        })
        .into_owned()
}
