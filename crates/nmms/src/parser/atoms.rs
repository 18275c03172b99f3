//! Recognizers for atomic sentences

use crate::syntax::Atom;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::all_consuming,
    IResult,
};

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_proposition_char(c: char) -> bool {
    is_name_char(c) || matches!(c, '\'' | '.' | '-')
}

/// Parse a concept, role or individual name
fn parse_name(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char)(input)
}

/// Parse a name surrounded by optional whitespace
fn parse_argument(input: &str) -> IResult<&str, &str> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_name(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, name))
}

/// Parse a role assertion `R(a,b)`
fn parse_role_assertion(input: &str) -> IResult<&str, Atom> {
    let (input, role) = parse_name(input)?;
    let (input, _) = char('(')(input)?;
    let (input, subject) = parse_argument(input)?;
    let (input, _) = char(',')(input)?;
    let (input, object) = parse_argument(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Atom::role(role, subject, object)))
}

/// Parse a concept assertion `C(a)`
fn parse_concept_assertion(input: &str) -> IResult<&str, Atom> {
    let (input, concept) = parse_name(input)?;
    let (input, _) = char('(')(input)?;
    let (input, individual) = parse_argument(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Atom::concept(concept, individual)))
}

fn parse_assertion(input: &str) -> IResult<&str, Atom> {
    let (input, _) = multispace0(input)?;
    let (input, atom) = alt((parse_role_assertion, parse_concept_assertion))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, atom))
}

fn parse_proposition(input: &str) -> IResult<&str, Atom> {
    let (input, _) = multispace0(input)?;
    let (input, name) = take_while1(is_proposition_char)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, Atom::proposition(name)))
}

/// Recognize a whole string as a concept or role assertion
pub fn assertion(text: &str) -> Option<Atom> {
    all_consuming(parse_assertion)(text)
        .ok()
        .map(|(_, atom)| atom)
}

/// Recognize a whole string as a bare propositional atom
pub fn proposition(text: &str) -> Option<Atom> {
    all_consuming(parse_proposition)(text)
        .ok()
        .map(|(_, atom)| atom)
}
