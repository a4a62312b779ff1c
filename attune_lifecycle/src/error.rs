// Copyright 2025 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// An out-of-order lifecycle hook call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// `render` (or a resource registration) before `mount`.
    #[error("component instance used before it was mounted")]
    RenderBeforeMount,
    /// A second `mount` without an `unmount` in between.
    #[error("component instance is already mounted")]
    DoubleMount,
    /// Any hook call after `unmount`.
    #[error("component instance was used after unmount")]
    UseAfterUnmount,
    /// `unmount` of an instance that was never mounted.
    #[error("component instance was unmounted before it was mounted")]
    UnmountBeforeMount,
}
