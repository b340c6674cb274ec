use std::fmt;

use super::Kind;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

const NULL_ADDRESS: &str = "Null email Address";
const NEEDS_TRIMMING: &str = "Email Address needs trimming";
const TOO_SHORT: &str = "The email address is too short";
const NO_NAME: &str = "No preceding name before @ sign in EmailAddress";
const NO_DOMAIN: &str = "No domain name after @ sign in EmailAddress";

/// Rules for [`EmailAddress`](super::EmailAddress).
///
/// An address must be present, carry no surrounding whitespace, and have
/// exactly one `@` with a name before it and a domain after it. The first
/// rule broken names the failure:
///
/// | input         | error                                              |
/// |---------------|----------------------------------------------------|
/// | absent        | `Null email Address`                               |
/// | `" a@b"`      | `Email Address needs trimming`                     |
/// | `""`          | `The email address is too short`                   |
/// | `"@b"`        | `No preceding name before @ sign in EmailAddress`  |
/// | `"a@"`        | `No domain name after @ sign in EmailAddress`      |
/// | `"a@b@c"`     | `There are 2 @ signs. Should be 1.`                |
#[derive(Debug)]
pub struct Email;

impl Kind for Email {
    type Held = String;
    const NAME: &'static str = "email address";

    fn validate(input: Maybe<String>) -> Outcome<String> {
        let at_signs = input.as_option().map_or(0, |address| address.matches('@').count());

        Outcome::initialize(input, NULL_ADDRESS)
            .ensure(|address| address.trim() == address, NEEDS_TRIMMING)
            .ensure(|address| !address.is_empty(), TOO_SHORT)
            .ensure(|address| address.find('@').is_some_and(|at| at > 0), NO_NAME)
            .ensure(
                |address| address.find('@') != Some(address.len() - 1),
                NO_DOMAIN,
            )
            .ensure(
                |_| at_signs == 1,
                format!("There are {at_signs} @ signs. Should be 1."),
            )
            .ensure(|address| address.chars().count() >= 3, TOO_SHORT)
    }

    fn fmt_held(value: &String, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(value)
    }
}
