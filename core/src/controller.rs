/// A group of routes sharing one state type.
pub trait Controller<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn router() -> axum::Router<S>;
}
