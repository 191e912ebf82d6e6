//! Workspace-level golden tests for apcalc live under `tests/`.
