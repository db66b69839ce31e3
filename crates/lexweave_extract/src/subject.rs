//! Subjects: recognized person/entity actors with private graphs.
//!
//! A subject is created the first time a proper-noun phrase matches no
//! existing subject's aliases; later mentions add aliases and attributes.
//! Subjects are never deleted. Each subject exclusively owns its private
//! [`GraphSpace`].

use std::fmt::Write as _;

use lexweave_foundation::{Gender, GraphSpace, Token};

use crate::attribute::Attribute;
use crate::phrase::Phrase;

/// A recognized actor: main name, alias set, gender, private graph, and the
/// attributes extracted for it.
#[derive(Clone, Debug)]
pub struct Subject {
    name: String,
    aliases: Vec<String>,
    gender: Gender,
    graph: GraphSpace,
    attributes: Vec<Attribute>,
}

impl Subject {
    /// Creates a subject; its name is seeded into the private graph.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        let name = name.into();
        let mut graph = GraphSpace::new();
        graph.emplace(&name);
        Self {
            name,
            aliases: Vec::new(),
            gender,
            graph,
            attributes: Vec::new(),
        }
    }

    /// The main name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subject's gender.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Sets the gender.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Aliases in first-seen order (the main name is not repeated here).
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Adds an alias unless it is the main name or already present.
    pub fn add_alias(&mut self, alias: &str) {
        if alias != self.name && !self.aliases.iter().any(|a| a == alias) {
            self.aliases.push(alias.to_string());
        }
    }

    /// The private association graph.
    #[must_use]
    pub fn graph(&self) -> &GraphSpace {
        &self.graph
    }

    /// Mutable access to the private graph.
    pub fn graph_mut(&mut self) -> &mut GraphSpace {
        &mut self.graph
    }

    /// Attributes in extraction order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Appends an extracted attribute; attributes are immutable once here.
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Returns true if the candidate names this subject.
    ///
    /// A candidate matches on exact equality with the main name or an
    /// alias; a single-token candidate also matches an alias containing it
    /// as a whitespace-delimited word, so "Smith" names "John Smith".
    #[must_use]
    pub fn matches_name(&self, candidate: &str) -> bool {
        self.known_names().any(|name| name_matches(name, candidate))
    }

    /// Returns true if any candidate names this subject.
    #[must_use]
    pub fn matches_any(&self, candidates: &[String]) -> bool {
        candidates.iter().any(|c| self.matches_name(c))
    }

    /// Match weight over a candidate alias set: the token count of the
    /// longest known name matching any candidate, preferring full-name
    /// matches over single-token matches. Zero when nothing matches.
    #[must_use]
    pub fn match_weight(&self, candidates: &[String]) -> usize {
        candidates
            .iter()
            .flat_map(|candidate| {
                self.known_names()
                    .filter(|name| name_matches(name, candidate))
                    .map(|name| name.split_whitespace().count())
            })
            .max()
            .unwrap_or(0)
    }

    fn known_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Renders the subject: name, aliases, gender, and the private graph.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{{");
        let _ = writeln!(out, "name: '{}'", self.name);
        let _ = writeln!(out, "aliases: {:?}", self.aliases);
        let _ = writeln!(out, "gender: {:?}", self.gender);
        let _ = writeln!(out, "graph:");
        out.push_str(&self.graph.render());
        out.push('}');
        out
    }
}

fn name_matches(name: &str, candidate: &str) -> bool {
    if name == candidate {
        return true;
    }
    !candidate.contains(char::is_whitespace)
        && name.split_whitespace().any(|word| word == candidate)
}

/// The registry owning every recognized subject.
#[derive(Clone, Debug, Default)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
}

impl SubjectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns true if no subjects exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Subject at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    /// Mutable subject at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Subject> {
        self.subjects.get_mut(index)
    }

    /// Iterates subjects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Subject> {
        self.subjects.iter()
    }

    /// Appends a subject, returning its index.
    pub fn push(&mut self, subject: Subject) -> usize {
        self.subjects.push(subject);
        self.subjects.len() - 1
    }

    /// Finds the subject maximizing match weight over the candidate alias
    /// set; `None` when nothing matches.
    #[must_use]
    pub fn find_best(&self, candidates: &[String]) -> Option<usize> {
        self.subjects
            .iter()
            .enumerate()
            .filter(|(_, s)| s.matches_any(candidates))
            .max_by_key(|(_, s)| s.match_weight(candidates))
            .map(|(index, _)| index)
    }

    /// Renders every subject, one block per subject.
    #[must_use]
    pub fn render(&self) -> String {
        self.subjects
            .iter()
            .map(Subject::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds the candidate alias set for a proper-noun phrase: the first token
/// alone, the full phrase, and — past two tokens — every middle-name and
/// first+last combination, with nobiliary particles ("of", "von", "de",
/// "la") excluded from the combinations and the particle-inclusive full
/// form kept as its own alias.
#[must_use]
pub fn build_aliases(phrase: &Phrase<'_>) -> Vec<String> {
    let tokens = phrase.tokens();
    let mut aliases = Vec::new();
    let Some(first) = tokens.first() else {
        return aliases;
    };

    aliases.push(first.surface.clone());

    if tokens.len() >= 2 {
        aliases.push(phrase.surface_text());

        if tokens.len() > 2 {
            let has_noble = tokens.iter().any(Token::is_nobiliary_particle);
            let reduced: Vec<&str> = tokens
                .iter()
                .filter(|t| !has_noble || !t.is_nobiliary_particle())
                .map(|t| t.surface.as_str())
                .collect();

            if reduced.len() > 2 {
                let last = reduced[reduced.len() - 1];
                for middle in &reduced[1..reduced.len() - 1] {
                    aliases.push(format!("{middle} {last}"));
                    aliases.push((*middle).to_string());
                }
                if has_noble {
                    aliases.push(reduced.join(" "));
                }
                aliases.push(format!("{} {last}", reduced[0]));
            } else if reduced.len() == 2 {
                aliases.push(format!("{} {}", reduced[0], reduced[1]));
            }
        }
    }

    aliases
}
