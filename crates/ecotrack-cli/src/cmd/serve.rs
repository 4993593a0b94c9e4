use anyhow::Result;
use std::path::Path;

pub fn run(root: &Path, port: u16, api_key: Option<String>) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        tokio::select! {
            res = ecotrack_server::serve(root_buf, port, api_key) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
