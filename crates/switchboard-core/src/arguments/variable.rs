//! Variable - named predicate registered by an argument type
//!
//! Argument types list their predicates once, in a `const` table:
//!
//! ```ignore
//! impl Argument for UserArgument {
//!     const NAME: &'static str = "user";
//!     const COMPATIBLE_TYPE: Option<InputType> = Some(InputType::Map);
//!     const VARIABLES: &'static [Variable<Self>] = &[
//!         Variable::new("age", Self::age),
//!         Variable::new("is_staff", Self::is_staff),
//!     ];
//!
//!     fn input(&self) -> &Input {
//!         &self.input
//!     }
//! }
//! ```
//!
//! Only what is listed there is exposed: helper methods, associated
//! functions and anything provided by the `Argument` trait itself never are.

use std::fmt;

use crate::variables::VariableValue;

/// A named predicate over an argument of type `A`.
pub struct Variable<A> {
    name: &'static str,
    eval: fn(&A) -> VariableValue,
}

impl<A> Variable<A> {
    pub const fn new(name: &'static str, eval: fn(&A) -> VariableValue) -> Self {
        Self { name, eval }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Binds the predicate to a concrete argument.
    pub fn bind<'a>(&'a self, argument: &'a A) -> BoundVariable<'a, A> {
        BoundVariable {
            argument,
            variable: self,
        }
    }
}

// Manual impls: derives would require `A: Clone` / `A: Debug`.
impl<A> Clone for Variable<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Variable<A> {}

impl<A> fmt::Debug for Variable<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable").field("name", &self.name).finish()
    }
}

/// A [`Variable`] bound to the argument it reads from, ready to call.
pub struct BoundVariable<'a, A> {
    argument: &'a A,
    variable: &'a Variable<A>,
}

impl<A> BoundVariable<'_, A> {
    pub fn name(&self) -> &'static str {
        self.variable.name
    }

    pub fn call(&self) -> VariableValue {
        (self.variable.eval)(self.argument)
    }
}

impl<A> Clone for BoundVariable<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for BoundVariable<'_, A> {}

impl<A> fmt::Debug for BoundVariable<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundVariable")
            .field("name", &self.variable.name)
            .finish()
    }
}

/// Two bound variables are equal when they are the same predicate bound to
/// the same argument instance.
impl<A> PartialEq for BoundVariable<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.argument, other.argument) && self.variable.name == other.variable.name
    }
}
