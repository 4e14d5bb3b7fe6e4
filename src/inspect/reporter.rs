//! Terminal rendering for decoded protocol errors.

use crate::protocol::{classify, CdpError};
use colored::*;

/// Reporter for printing a decoded error and its classification
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Prints the decoded fields and the catalog match, if any.
    pub fn print(&self, err: &CdpError) {
        println!("{}", "Decoded protocol error".bold());
        println!("  code:     {}", err.code);
        println!("  message:  {}", err.message);
        if err.data.is_empty() {
            println!("  data:     {}", "(none)".dimmed());
        } else {
            println!("  data:     {}", err.data);
        }

        match classify(err) {
            Some(name) => println!("  category: {}", name.green().bold()),
            None => println!("  category: {}", "unrecognized".yellow()),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
