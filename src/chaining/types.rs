//! Rule trait and the closure-backed rule type.

use std::fmt;

use super::error::BoxError;

/// A condition/action pair evaluated by the [`Engine`](super::Engine).
///
/// The condition only reads the payload; the action is the one place
/// where the payload is expected to change. Either side may fail by
/// returning an error, which aborts the current execution.
///
/// # Type Parameters
///
/// * `P` - The payload type the rule operates on
///
/// # Examples
///
/// ```ignore
/// struct Discount;
///
/// impl ForwardRule<Order> for Discount {
///     fn name(&self) -> &str { "Discount" }
///     fn condition(&self, order: &Order) -> Result<bool, BoxError> {
///         Ok(!order.discounted && order.total > 100.0)
///     }
///     fn action(&self, order: &mut Order) -> Result<(), BoxError> {
///         order.total *= 0.9;
///         order.discounted = true;
///         Ok(())
///     }
/// }
/// ```
pub trait ForwardRule<P>: Send + Sync {
    /// Returns the name of this rule. Used for diagnostics only;
    /// duplicate names are allowed.
    fn name(&self) -> &str;

    /// Returns whether the rule may fire against the current payload.
    fn condition(&self, payload: &P) -> Result<bool, BoxError>;

    /// Applies the rule to the payload.
    fn action(&self, payload: &mut P) -> Result<(), BoxError>;
}

type ConditionFn<P> = dyn Fn(&P) -> Result<bool, BoxError> + Send + Sync;
type ActionFn<P> = dyn Fn(&mut P) -> Result<(), BoxError> + Send + Sync;

/// A rule built from a name and two closures.
///
/// The rule carries no priority; that is assigned when it is registered
/// with an engine, so a `Rule` never changes after construction.
///
/// # Examples
///
/// ```
/// use u_infer::chaining::{ForwardRule, Rule};
///
/// struct Person { age: u32, adult: bool }
///
/// let rule = Rule::new(
///     "Age > 18",
///     |p: &Person| !p.adult && p.age > 18,
///     |p: &mut Person| p.adult = true,
/// );
/// assert_eq!(rule.name(), "Age > 18");
/// ```
pub struct Rule<P> {
    name: String,
    condition: Box<ConditionFn<P>>,
    action: Box<ActionFn<P>>,
}

impl<P: 'static> Rule<P> {
    /// Creates a rule whose condition and action cannot fail.
    pub fn new<W, T>(name: impl Into<String>, when: W, then: T) -> Self
    where
        W: Fn(&P) -> bool + Send + Sync + 'static,
        T: Fn(&mut P) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            condition: Box::new(move |payload: &P| Ok(when(payload))),
            action: Box::new(move |payload: &mut P| {
                then(payload);
                Ok(())
            }),
        }
    }

    /// Creates a rule whose condition and action may return errors.
    ///
    /// An `Err` from either closure stops the execution and surfaces as
    /// [`EngineError::Condition`](super::EngineError::Condition) or
    /// [`EngineError::Action`](super::EngineError::Action).
    pub fn fallible<W, T, E>(name: impl Into<String>, when: W, then: T) -> Self
    where
        W: Fn(&P) -> Result<bool, E> + Send + Sync + 'static,
        T: Fn(&mut P) -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            condition: Box::new(move |payload: &P| when(payload).map_err(Into::into)),
            action: Box::new(move |payload: &mut P| then(payload).map_err(Into::into)),
        }
    }
}

impl<P> ForwardRule<P> for Rule<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn condition(&self, payload: &P) -> Result<bool, BoxError> {
        (self.condition)(payload)
    }

    fn action(&self, payload: &mut P) -> Result<(), BoxError> {
        (self.action)(payload)
    }
}

impl<P> fmt::Debug for Rule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}
