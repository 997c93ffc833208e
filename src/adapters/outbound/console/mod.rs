/// Console adapters: stderr progress and the interactive mapping prompt
mod mapping_prompt;
mod progress_reporter;

pub use mapping_prompt::ConsoleMappingPrompt;
pub use progress_reporter::StderrProgressReporter;
