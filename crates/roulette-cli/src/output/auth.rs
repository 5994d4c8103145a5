// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::AuthStatusResult;

use super::Renderable;

impl Renderable for AuthStatusResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        if self.authenticated {
            writeln!(w, "{} GitHub token found", style("*").green().bold())?;
        } else if self.placeholder {
            writeln!(
                w,
                "{} GitHub token is empty or a placeholder value",
                style("!").yellow().bold()
            )?;
        } else {
            writeln!(
                w,
                "{} No GitHub token. Set {} or run {}.",
                style("!").yellow().bold(),
                style("GITHUB_TOKEN").cyan(),
                style("gh auth login").cyan()
            )?;
        }
        if let Some(method) = self.method {
            writeln!(w, "  Source: {}", style(method.to_string()).cyan())?;
        }
        writeln!(w)?;
        Ok(())
    }
}
