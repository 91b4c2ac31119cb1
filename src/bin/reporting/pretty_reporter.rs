use colored::*;
use variance::*;

pub struct PrettyReporter;

impl PrettyReporter {
    fn header(diagnostic: &Diagnostic) -> String {
        let name: &'static str = diagnostic.into();
        let label = format!("{}[E{:03}]:", diagnostic.level(), diagnostic.code());
        let label = match diagnostic.level() {
            DiagnosticLevel::Error => label.bright_red().bold(),
            DiagnosticLevel::Info => label.cyan().bold(),
        };

        match diagnostic.origin() {
            Some(uri) => {
                let location = match uri.path() {
                    Some(path) => path.display().to_string(),
                    None => uri.to_string(),
                };
                format!("{} {} {}", label, name, location.bright_black())
            }
            None => format!("{} {}", label, name),
        }
    }

    fn message(diagnostic: &Diagnostic) -> String {
        diagnostic
            .to_string()
            .lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn summary(diagnostics: &[Diagnostic]) -> String {
        let errors = diagnostics
            .iter()
            .filter(|d| d.level() == DiagnosticLevel::Error)
            .count();
        let infos = diagnostics.len() - errors;

        let summary = format!("{} errors, {} notes", errors, infos);
        if errors > 0 {
            summary.red().to_string()
        } else {
            summary.green().to_string()
        }
    }
}

impl Reporter for PrettyReporter {
    fn report(diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            println!("{}", Self::header(diagnostic));
            println!("{}\n", Self::message(diagnostic));
        }
        println!("{}", Self::summary(diagnostics));
    }
}
