/// The closed set of reasons event creation can be rejected. Wire codes for
/// these live in the HTTP layer; the domain only names the rule that broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    TitleIsRequired,
    DateMustNotBePast,
}
