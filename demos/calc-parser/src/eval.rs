use std::collections::HashMap;

use relex::Token;

use crate::{CalcError, CalcKind, CalcStream, Value, scanner};

/// Evaluates `;`-separated statements, keeping variables between calls.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    vars: HashMap<String, f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Evaluates every statement of `input`.
    ///
    /// A failing statement yields its error and evaluation resumes after
    /// the next `;`.
    pub fn eval(&mut self, input: &str) -> Vec<Result<f64, CalcError>> {
        let mut cursor = Cursor::new(scanner().tokenize(input));
        let mut results = Vec::new();

        while cursor.current().is_some() {
            if cursor.current_is(CalcKind::Semi) {
                cursor.bump();
                continue;
            }

            let result = self
                .statement(&mut cursor)
                .and_then(|value| cursor.end_statement().map(|()| value));

            if let Err(err) = &result {
                tracing::debug!(error = %err, "recovering after failed statement");
                cursor.recover();
            }
            results.push(result);
        }

        results
    }

    fn statement(&mut self, cursor: &mut Cursor) -> Result<f64, CalcError> {
        if cursor.current_is(CalcKind::Ident)
            && cursor.stream.is_next_token(Some(&CalcKind::Assign))
        {
            let name = cursor.text();
            cursor.bump();
            cursor.bump();
            let value = self.expr(cursor)?;
            self.vars.insert(name, value);
            return Ok(value);
        }
        self.expr(cursor)
    }

    fn expr(&mut self, cursor: &mut Cursor) -> Result<f64, CalcError> {
        let mut lhs = self.term(cursor)?;
        while let Some(op) = cursor.take_any(&[CalcKind::Plus, CalcKind::Minus]) {
            let rhs = self.term(cursor)?;
            lhs = match op {
                CalcKind::Plus => lhs + rhs,
                _ => lhs - rhs,
            };
        }
        Ok(lhs)
    }

    fn term(&mut self, cursor: &mut Cursor) -> Result<f64, CalcError> {
        let mut lhs = self.unary(cursor)?;
        loop {
            let at = cursor.stream.where_current();
            let Some(op) = cursor.take_any(&[CalcKind::Star, CalcKind::Slash]) else {
                break;
            };
            let rhs = self.unary(cursor)?;
            lhs = match op {
                CalcKind::Star => lhs * rhs,
                _ if rhs == 0.0 => return Err(CalcError::DivisionByZero { at }),
                _ => lhs / rhs,
            };
        }
        Ok(lhs)
    }

    fn unary(&mut self, cursor: &mut Cursor) -> Result<f64, CalcError> {
        if cursor.take_any(&[CalcKind::Minus]).is_some() {
            return Ok(-self.unary(cursor)?);
        }
        self.primary(cursor)
    }

    fn primary(&mut self, cursor: &mut Cursor) -> Result<f64, CalcError> {
        let at = cursor.stream.where_current();
        let Some(token) = cursor.current().cloned() else {
            return Err(CalcError::Empty {
                expect: "expression",
            });
        };

        match (token.kind(), token.value()) {
            (Some(CalcKind::Number), Value::Number(n)) => {
                cursor.bump();
                Ok(*n)
            }
            (Some(CalcKind::Ident), _) => {
                let name = cursor.text();
                cursor.bump();
                self.get(&name)
                    .ok_or(CalcError::UnknownVariable { name, at })
            }
            (Some(CalcKind::LParen), _) => {
                cursor.bump();
                let value = self.expr(cursor)?;
                cursor.expect(CalcKind::RParen)?;
                Ok(value)
            }
            (None, _) => Err(CalcError::Unrecognised {
                text: cursor.text(),
                at,
            }),
            (Some(_), _) => Err(cursor.unexpected("expression")),
        }
    }
}

/// Consuming view over the stream: the stream's current token is the next
/// one to consume, and stepping off the last token exhausts the cursor.
struct Cursor {
    stream: CalcStream,
    exhausted: bool,
}

impl Cursor {
    fn new(stream: CalcStream) -> Self {
        Self {
            stream,
            exhausted: false,
        }
    }

    fn current(&self) -> Option<&Token<CalcKind, Value>> {
        if self.exhausted {
            None
        } else {
            self.stream.read()
        }
    }

    fn current_is(&self, kind: CalcKind) -> bool {
        self.current().is_some_and(|t| t.is(&kind))
    }

    /// Source text of the current token.
    fn text(&self) -> String {
        self.current()
            .map(|t| self.stream.slice(t).to_string())
            .unwrap_or_default()
    }

    fn bump(&mut self) {
        if !self.stream.next() {
            self.exhausted = true;
        }
    }

    fn take_any(&mut self, kinds: &[CalcKind]) -> Option<CalcKind> {
        let kind = self.current().and_then(Token::kind).copied()?;
        if kinds.contains(&kind) {
            self.bump();
            Some(kind)
        } else {
            None
        }
    }

    fn expect(&mut self, kind: CalcKind) -> Result<(), CalcError> {
        if self.take_any(&[kind]).is_some() {
            return Ok(());
        }
        Err(match self.current() {
            Some(_) => self.unexpected(kind.describe()),
            None => CalcError::Empty {
                expect: kind.describe(),
            },
        })
    }

    fn end_statement(&mut self) -> Result<(), CalcError> {
        match self.current() {
            None => Ok(()),
            Some(_) => self.expect(CalcKind::Semi),
        }
    }

    fn unexpected(&self, expect: &'static str) -> CalcError {
        CalcError::Expected {
            expect,
            found: self.text(),
            at: self.stream.where_current(),
        }
    }

    /// Skips past the next `;`, or to the end of input.
    fn recover(&mut self) {
        if self.exhausted {
            return;
        }
        if self.current_is(CalcKind::Semi) {
            self.bump();
            return;
        }
        self.stream.skip_until(Some(&CalcKind::Semi));
        // onto the `;` if there is one, then past it
        self.bump();
        if self.current_is(CalcKind::Semi) {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        let mut calc = Calculator::new();
        assert_eq!(calc.eval("1 + 2 * 3"), vec![Ok(7.0)]);
        assert_eq!(calc.eval("(1 + 2) * 3"), vec![Ok(9.0)]);
        assert_eq!(calc.eval("-2 * -3"), vec![Ok(6.0)]);
    }

    #[test]
    fn test_variables_persist() {
        let mut calc = Calculator::new();
        calc.eval("rate = 0.5");
        assert_eq!(calc.get("rate"), Some(0.5));
        assert_eq!(calc.eval("rate * 10"), vec![Ok(5.0)]);
    }

    #[test]
    fn test_empty_input() {
        let mut calc = Calculator::new();
        assert!(calc.eval("").is_empty());
        assert!(calc.eval(" ; ; ").is_empty());
    }
}
