use crate::*;

pub trait Reporter {
    fn report(diagnostics: &[Diagnostic]);
}

pub struct BasicReporter;

impl Reporter for BasicReporter {
    fn report(diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            println!("{}: {:?}", diagnostic.level(), diagnostic);
        }
    }
}
