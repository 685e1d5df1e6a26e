//! RAII guard for block environments.
//!
//! [`BlockGuard`] holds `&mut Evaluator` and derefs to it, so evaluation
//! continues through the guard while the block is active. Dropping the guard
//! pops the block's frame, including on early return through `?`.

use std::ops::{Deref, DerefMut};

use super::Evaluator;
use crate::environment::EnvId;
use crate::EvalError;

/// An entered block. The frame is popped when the guard drops.
pub struct BlockGuard<'e> {
    evaluator: &'e mut Evaluator,
    env: EnvId,
    frame_len: usize,
}

impl BlockGuard<'_> {
    /// The block's environment.
    pub fn env(&self) -> EnvId {
        self.env
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.evaluator.frames.truncate(self.frame_len);
    }
}

impl Deref for BlockGuard<'_> {
    type Target = Evaluator;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl Evaluator {
    /// Enter a block under `parent` and return a guard that exits it on drop.
    pub fn block(&mut self, parent: EnvId) -> Result<BlockGuard<'_>, EvalError> {
        let frame_len = self.frames.len();
        let env = self.enter_block(parent)?;
        Ok(BlockGuard {
            evaluator: self,
            env,
            frame_len,
        })
    }

    /// Run `f` inside a block under `parent`.
    ///
    /// ```text
    /// evaluator.with_block(env, |inner, block| {
    ///     inner.declare(block, name, value, DeclKind::Let)?;
    ///     inner.lookup(block, name)
    /// })
    /// ```
    pub fn with_block<T>(
        &mut self,
        parent: EnvId,
        f: impl FnOnce(&mut Evaluator, EnvId) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        let mut guard = self.block(parent)?;
        let env = guard.env();
        f(&mut guard, env)
    }
}
