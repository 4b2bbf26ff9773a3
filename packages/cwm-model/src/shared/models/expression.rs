//! Expression data types
//!
//! CWM expressions are uninterpreted text tagged with a language. The
//! specialised kinds (boolean, procedure, query) are newtypes over
//! [`Expression`] so a query cannot be passed where a constraint body is
//! expected.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Expression {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Expression {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            language: None,
        }
    }

    pub fn with_language(body: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            language: Some(language.into()),
        }
    }
}

macro_rules! expression_kind {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Expression);

        impl $name {
            pub fn new(body: impl Into<String>) -> Self {
                Self(Expression::new(body))
            }

            pub fn with_language(body: impl Into<String>, language: impl Into<String>) -> Self {
                Self(Expression::with_language(body, language))
            }

            pub fn into_inner(self) -> Expression {
                self.0
            }

            pub fn as_expression(&self) -> &Expression {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = Expression;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<Expression> for $name {
            fn from(expr: Expression) -> Self {
                Self(expr)
            }
        }

        impl From<$name> for Expression {
            fn from(expr: $name) -> Self {
                expr.0
            }
        }
    };
}

expression_kind!(
    /// Expression evaluating to a boolean (constraint bodies)
    BooleanExpression
);
expression_kind!(
    /// Executable body of a method
    ProcedureExpression
);
expression_kind!(
    /// Query defining a view or column set
    QueryExpression
);
