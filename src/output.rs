//! Terminal rendering of parsed intents and collected suggestions.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::query::SearchIntent;
use crate::suggest::LexiconSuggestion;

/// Print a parsed intent, one labelled field per line.
pub fn print_intent(intent: &SearchIntent, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{:?}", intent.kind())?;
    stdout.reset()?;
    writeln!(stdout)?;

    print_field(&mut stdout, "query", intent.query_text())?;
    print_field(&mut stdout, "versions", &intent.versions().join(", "))?;
    if let Some(sub_range) = intent.sub_range() {
        print_field(&mut stdout, "sub-range", sub_range)?;
    }
    if let Some(main_range) = intent.main_range() {
        print_field(&mut stdout, "main-range", main_range)?;
    }
    if let Some(filter) = intent.original_filter() {
        print_field(&mut stdout, "original-filter", &filter.join(", "))?;
    }
    Ok(())
}

/// Print collected suggestions, one gloss per line.
pub fn print_suggestions(suggestions: &[LexiconSuggestion], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if suggestions.is_empty() {
        writeln!(stdout, "no suggestions")?;
        return Ok(());
    }

    for suggestion in suggestions {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", suggestion.gloss)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn print_field(stdout: &mut StandardStream, label: &str, value: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stdout, "  {label}: ")?;
    stdout.reset()?;
    writeln!(stdout, "{value}")
}
