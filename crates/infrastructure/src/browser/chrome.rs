use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::process::Stdio;
use std::time::Duration;
use storylight_application::ports::{BrowserLauncher, BrowserSession};
use storylight_domain::DomainError;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

const PORT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Launches a fresh headless Chrome per audit scope.
pub struct ChromeLauncher {
    chrome_path: String,
    flags: Vec<String>,
    launch_timeout: Duration,
}

impl ChromeLauncher {
    pub fn new(chrome_path: String, flags: Vec<String>, launch_timeout: Duration) -> Self {
        Self {
            chrome_path,
            flags,
            launch_timeout,
        }
    }

    fn free_port() -> Result<u16, DomainError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).map_err(|e| {
            DomainError::ResourceLaunchFailed(format!("No free debugging port: {}", e))
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| DomainError::ResourceLaunchFailed(e.to_string()))?
            .port();
        Ok(port)
    }

    /// Waits until the debugging port accepts connections or the child exits.
    async fn wait_for_port(&self, child: &mut Child, port: u16) -> Result<(), DomainError> {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        let deadline = Instant::now() + self.launch_timeout;

        loop {
            if TcpStream::connect(addr).await.is_ok() {
                return Ok(());
            }

            if let Ok(Some(status)) = child.try_wait() {
                return Err(DomainError::ResourceLaunchFailed(format!(
                    "Chrome exited during startup with {}",
                    status
                )));
            }

            if Instant::now() >= deadline {
                return Err(DomainError::ResourceLaunchFailed(format!(
                    "Chrome did not open port {} within {}s",
                    port,
                    self.launch_timeout.as_secs()
                )));
            }

            sleep(PORT_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl BrowserLauncher for ChromeLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, DomainError> {
        let port = Self::free_port()?;

        let mut child = Command::new(&self.chrome_path)
            .args(&self.flags)
            .arg(format!("--remote-debugging-port={}", port))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::ResourceLaunchFailed(format!(
                    "Failed to start {}: {}",
                    self.chrome_path, e
                ))
            })?;

        if let Err(e) = self.wait_for_port(&mut child, port).await {
            warn!(error = %e, "Chrome launch failed");
            let _ = child.kill().await;
            return Err(e);
        }

        info!(port, pid = child.id(), "Chrome launched");
        Ok(Box::new(ChromeSession { child, port }))
    }
}

pub struct ChromeSession {
    child: Child,
    port: u16,
}

#[async_trait]
impl BrowserSession for ChromeSession {
    fn debugging_port(&self) -> u16 {
        self.port
    }

    async fn release(mut self: Box<Self>) {
        match self.child.kill().await {
            Ok(()) => debug!(port = self.port, "Chrome terminated"),
            Err(e) => warn!(port = self.port, error = %e, "Failed to terminate Chrome"),
        }
    }
}
