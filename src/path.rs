use crate::error::{SubstResult, SubstitutionError};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "path.pest"]
struct PathParser;

/// One step into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member: `.name` or `."quoted name"`
    Field(String),

    /// Array element: `[3]`
    Index(usize),
}

/// A parsed record path such as `.record.items[0].id`.
///
/// The leading dot is optional and a lone `.` selects the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordPath {
    segments: Vec<PathSegment>,
}

impl RecordPath {
    /// Parse a path string
    pub fn parse(input: &str) -> SubstResult<Self> {
        let pairs = PathParser::parse(Rule::path, input)
            .map_err(|err| SubstitutionError::from_pest(input, err))?;

        let mut segments = Vec::new();
        for pair in pairs.flatten() {
            match pair.as_rule() {
                Rule::field => {
                    let inner = pair
                        .into_inner()
                        .next()
                        .ok_or_else(|| SubstitutionError::path_syntax(input, 1, "empty field"))?;
                    segments.push(PathSegment::Field(Self::field_name(inner)));
                }
                // A bare leading name; names inside fields are handled above
                Rule::name if segments.is_empty() => {
                    segments.push(PathSegment::Field(pair.as_str().to_string()));
                }
                Rule::number => {
                    let column = pair.as_span().start() + 1;
                    let index = pair.as_str().parse::<usize>().map_err(|err| {
                        SubstitutionError::path_syntax(input, column, err.to_string())
                    })?;
                    segments.push(PathSegment::Index(index));
                }
                _ => {}
            }
        }

        Ok(Self { segments })
    }

    fn field_name(pair: pest::iterators::Pair<Rule>) -> String {
        match pair.as_rule() {
            Rule::quoted => pair
                .into_inner()
                .next()
                .map(|text| text.as_str().to_string())
                .unwrap_or_default(),
            _ => pair.as_str().to_string(),
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// True for the `.` path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Walk `record` along this path
    #[cfg(feature = "json")]
    pub fn select<'v>(&self, record: &'v serde_json::Value) -> Option<&'v serde_json::Value> {
        self.segments
            .iter()
            .try_fold(record, |value, segment| match segment {
                PathSegment::Field(name) => value.get(name.as_str()),
                PathSegment::Index(index) => value.get(*index),
            })
    }
}
