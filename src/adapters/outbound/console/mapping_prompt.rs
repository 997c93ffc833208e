use crate::ports::outbound::{MappingPrompt, PromptDecision};
use crate::sbom_generation::domain::{CpeDictionaryEntry, DEFAULT_PURL_TEMPLATE};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

const CHOICE_PROMPT: &str = "Select option number or enter command ([s]kip, [c]ustom, [q]uit): ";

/// ConsoleMappingPrompt adapter asking the operator about unmapped ports
///
/// Generic over its input and output so it can be driven from a script in
/// tests; production wiring uses stdin and stderr.
pub struct ConsoleMappingPrompt<R: BufRead, W: Write> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl ConsoleMappingPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConsoleMappingPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn say(&self, line: &str) {
        // Console output failures are not worth aborting a run for
        let _ = writeln!(self.output.borrow_mut(), "{}", line);
    }

    /// Prints `question` and reads one trimmed answer; None on end of input
    fn ask(&self, question: &str) -> Option<String> {
        {
            let mut output = self.output.borrow_mut();
            let _ = write!(output, "{}", question);
            let _ = output.flush();
        }

        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn ask_custom(&self) -> Option<Option<PromptDecision>> {
        let vendor = self.ask("  Vendor (CPE party): ")?;
        let product = self.ask("  Product (CPE component): ")?;
        if vendor.is_empty() || product.is_empty() {
            self.say("[WARN] Vendor and product cannot be empty. Try again.");
            return Some(None);
        }

        let purl_template = self.ask(&format!("  PURL template [{}]: ", DEFAULT_PURL_TEMPLATE))?;
        let purl_template = if purl_template.is_empty() {
            DEFAULT_PURL_TEMPLATE.to_string()
        } else {
            purl_template
        };

        Some(Some(PromptDecision::Custom {
            vendor,
            product,
            purl_template,
        }))
    }
}

impl<R: BufRead, W: Write> MappingPrompt for ConsoleMappingPrompt<R, W> {
    fn prompt(
        &self,
        name: &str,
        version: &str,
        suggestions: &[CpeDictionaryEntry],
    ) -> PromptDecision {
        self.say(&format!(
            "[EDIT] Port {} ({}) missing in mapping table.",
            name, version
        ));
        if suggestions.is_empty() {
            self.say("[EDIT] No suggestions found in the CPE dictionary.");
        } else {
            self.say("[EDIT] Suggested CPE vendor/product pairs:");
            for (idx, suggestion) in suggestions.iter().enumerate() {
                self.say(&format!("  {}) {}", idx + 1, suggestion));
            }
        }

        loop {
            let Some(choice) = self.ask(CHOICE_PROMPT) else {
                self.say("");
                return PromptDecision::Abort;
            };

            match choice.to_lowercase().as_str() {
                "" | "s" | "skip" => return PromptDecision::Skip,
                "q" | "quit" | "exit" => return PromptDecision::Abort,
                "c" | "custom" => match self.ask_custom() {
                    None => return PromptDecision::Abort,
                    Some(Some(decision)) => return decision,
                    Some(None) => continue,
                },
                other if !other.is_empty() && other.bytes().all(|b| b.is_ascii_digit()) => {
                    match other.parse::<usize>() {
                        Ok(index) if (1..=suggestions.len()).contains(&index) => {
                            return PromptDecision::Select(index - 1)
                        }
                        _ => self.say("[WARN] Invalid option number. Try again."),
                    }
                }
                _ => self.say(
                    "[WARN] Unrecognized input. Provide a number, 'c' for custom, 's' to skip, or 'q' to quit.",
                ),
            }
        }
    }
}
