/// Anything the quality scorer can assess.
///
/// Implemented by both the raw and the normalized record so diagnostics can
/// compare the score before and after normalization.
pub trait QualitySubject {
    fn title_text(&self) -> &str;
    fn company_text(&self) -> &str;
    fn description_text(&self) -> &str;
    fn location_text(&self) -> &str;
    fn has_salary(&self) -> bool;
    fn skill_count(&self) -> usize;

    /// Value of a named field used by the required-field completeness check.
    /// Unknown names read as empty.
    fn required_field(&self, name: &str) -> &str;
}
