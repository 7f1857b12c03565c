use anyhow::Result;

use crate::infra::contracts::ExternalOpener;

/// Hands targets to the desktop's default handler without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that_detached(target)?;
        Ok(())
    }
}
