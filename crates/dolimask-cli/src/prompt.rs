//! Line-based interactive prompts.

use std::io::{self, Write};

use dolimask_core::{Error, Result};

fn flush() -> Result<()> {
    io::stdout()
        .flush()
        .map_err(|err| Error::Other(format!("cannot flush stdout: {err}")))
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|err| Error::Other(format!("cannot read stdin: {err}")))?;
    Ok(line.trim().to_string())
}

/// Ask until a non-empty answer comes back.
pub fn ask(label: &str) -> Result<String> {
    loop {
        print!("{label}: ");
        flush()?;
        let value = read_line()?;
        if !value.is_empty() {
            return Ok(value);
        }
    }
}

/// Ask once; an empty answer takes the default.
pub fn ask_or_default(label: &str, default: &str) -> Result<String> {
    print!("{label} [{default}]: ");
    flush()?;
    let value = read_line()?;
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value
    })
}

/// Ask once; an empty answer means "none".
pub fn ask_optional(label: &str) -> Result<Option<String>> {
    print!("{label} (empty to skip): ");
    flush()?;
    let value = read_line()?;
    Ok((!value.is_empty()).then_some(value))
}

/// Ask without echoing the input.
pub fn ask_password(label: &str) -> Result<String> {
    rpassword::prompt_password(format!("{label}: "))
        .map_err(|err| Error::Other(format!("cannot read password: {err}")))
}

/// Yes/no question, repeated until the answer is recognizable.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        print!("{question} {hint} ");
        flush()?;
        match parse_yes_no(&read_line()?, default) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer y or n."),
        }
    }
}

// French operators get to answer o/oui as well.
pub(crate) fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" | "o" | "oui" => Some(true),
        "n" | "no" | "non" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_yes_no;

    #[test]
    fn recognizes_english_and_french_answers() {
        assert_eq!(parse_yes_no("y", false), Some(true));
        assert_eq!(parse_yes_no("YES", false), Some(true));
        assert_eq!(parse_yes_no("oui", false), Some(true));
        assert_eq!(parse_yes_no("n", true), Some(false));
        assert_eq!(parse_yes_no("Non", true), Some(false));
    }

    #[test]
    fn empty_answer_takes_the_default() {
        assert_eq!(parse_yes_no("", true), Some(true));
        assert_eq!(parse_yes_no("  ", false), Some(false));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_yes_no("maybe", false), None);
    }
}
