/// UseCase metadata for identification and documentation
pub trait UseCaseMetadata {
    /// UseCase index (for example, "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (for example, "generate_reports")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_generate_reports"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
