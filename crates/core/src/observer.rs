/// Hook called by a solver after each step.
///
/// A solver passes every event it produces to `observe`. Returning `None`
/// leaves the solver alone; `Some(action)` asks it to act, with the set of
/// actions defined per solver (for example stopping early, or keeping the
/// previous seed in a continuation sweep).
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
