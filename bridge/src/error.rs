use thiserror::Error;

/// Closed set of call-validation failures.
///
/// All of these are detected before any operand-stack mutation; a
/// failed call leaves the VM exactly as it was. The kinds are
/// deterministic facts about a (signature, descriptor) pair, so
/// retrying without changing one of them cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallError {
    /// Handle does not resolve to a symbol, or the symbol is not a
    /// function.
    #[error("symbol is missing or not a callable function")]
    WrongSymbol,

    /// Supplied argument count differs from the declared arity.
    #[error("argument count does not match function arity")]
    WrongArgsSize,

    /// An argument's type tag differs from the declared parameter tag
    /// at its position.
    #[error("argument type does not match declared parameter type")]
    WrongArgType,

    /// Requested return kind is incompatible with the declared return.
    #[error("requested return kind does not match function signature")]
    WrongRetVal,
}
