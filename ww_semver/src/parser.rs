use crate::{ParseError, Version};

/// Parse `[v]major[.minor[.patch[-tag]]]` in one pass over the trimmed input.
///
/// * `None` input is rejected with [ParseError::InputNull], blank input with [ParseError::InputBlank].
/// * One `v` is accepted as the very first character.
/// * Missing minor and patch become 0, `"1"` is `1.0.0`.
/// * `-` is only accepted after major and minor were assigned and at least one digit follows the last dot.
///   Everything after it is the tag, trimmed, and a blank tag is no tag.
/// * Any other character fails with [ParseError::InvalidCharacter].
///
/// Returned tag borrows from the input. No state survives between calls.
pub fn parse_version(input: Option<&str>) -> Result<Version<'_>, ParseError> {
    let Some(input) = input else {
        return Err(reject(ParseError::InputNull));
    };
    let input = input.trim();
    if input.is_empty() {
        return Err(reject(ParseError::InputBlank));
    }

    let mut scan = Scan::default();
    let mut tag = None;
    for (idx, ch) in input.char_indices() {
        match ch {
            'v' if idx == 0 => {}
            '0'..='9' => scan.push_digit(ch as u32 - '0' as u32)?,
            '.' if !scan.major_and_minor_assigned() => scan.flush(),
            '-' => {
                if !scan.major_and_minor_assigned() || !scan.has_digit {
                    return Err(reject(ParseError::MisplacedTag));
                }
                scan.flush();
                // `-` is one byte, the rest of the string is the tag
                tag = Some(&input[idx + 1..]);
                break;
            }
            _ => return Err(reject(ParseError::InvalidCharacter(ch))),
        }
    }
    if scan.has_digit {
        scan.flush();
    }

    let version = Version::with_tag(
        scan.major.unwrap_or(0),
        scan.minor.unwrap_or(0),
        scan.patch.unwrap_or(0),
        tag,
    );

    #[cfg(feature = "defmt-extended")]
    defmt::trace!("parse_version({}) = {}", input, version);
    #[cfg(feature = "tracing-extended")]
    tracing::trace!("parse_version({input:?}) = {version}");

    Ok(version)
}

fn reject(error: ParseError) -> ParseError {
    #[cfg(feature = "defmt-extended")]
    defmt::trace!("parse_version rejected input: {}", error);
    #[cfg(feature = "tracing-extended")]
    tracing::trace!("parse_version rejected input: {error:?}");

    error
}

/// Scratch state of one [parse_version] call.
#[derive(Default, Debug)]
struct Scan {
    major: Option<u32>,
    minor: Option<u32>,
    patch: Option<u32>,
    value: u32,
    /// Digit seen since the last `.` or since the start.
    has_digit: bool,
}

impl Scan {
    fn push_digit(&mut self, digit: u32) -> Result<(), ParseError> {
        self.value = self
            .value
            .checked_mul(10)
            .and_then(|value| value.checked_add(digit))
            .ok_or_else(|| reject(ParseError::ComponentTooLarge))?;
        self.has_digit = true;
        Ok(())
    }

    fn major_and_minor_assigned(&self) -> bool {
        self.major.is_some() && self.minor.is_some()
    }

    /// Move the accumulated value into the next unassigned component.
    /// Once patch is assigned the value is dropped.
    fn flush(&mut self) {
        if let Some(slot) = [&mut self.major, &mut self.minor, &mut self.patch]
            .into_iter()
            .find(|slot| slot.is_none())
        {
            *slot = Some(self.value);
        }
        self.value = 0;
        self.has_digit = false;
    }
}
