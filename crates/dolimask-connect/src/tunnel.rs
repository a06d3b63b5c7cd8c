use std::net::TcpListener;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use dolimask_core::{mask_argument, Error, MysqlConfig, SshAuth, SshConfig};

/// Preferred local forwarding port; a random free port is used when taken.
const DEFAULT_LOCAL_PORT: u16 = 3307;
/// How long to wait for the forwarded port to start accepting connections.
const PORT_WAIT: Duration = Duration::from_secs(20);
/// Grace period between SIGTERM and SIGKILL on shutdown.
const TERM_GRACE: Duration = Duration::from_secs(10);

/// A supervised `ssh -N -L` child process forwarding a local port to the
/// remote MySQL server.
pub struct SshTunnel {
    child: Child,
    local_port: u16,
    displayed: String,
}

impl SshTunnel {
    /// Spawns the tunnel and waits until the local port accepts connections.
    pub async fn open(ssh: &SshConfig, mysql: &MysqlConfig) -> Result<Self, Error> {
        let auth = ssh.auth()?;
        let local_port = pick_local_port()?;
        let (program, args, secret) = tunnel_command(ssh, &auth, mysql, local_port);

        if !binary_on_path(&program) {
            return Err(Error::Tunnel(format!(
                "'{program}' is not installed or not on PATH"
            )));
        }
        if program != "ssh" && !binary_on_path("ssh") {
            return Err(Error::Tunnel(
                "'ssh' is not installed or not on PATH".to_string(),
            ));
        }

        let displayed = displayed_command(&program, &args, secret.as_deref());
        info!(command = %displayed, local_port, "starting ssh tunnel");

        let child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|err| Error::Tunnel(format!("cannot start '{program}': {err}")))?;

        let mut tunnel = Self {
            child,
            local_port,
            displayed,
        };

        if !wait_for_port(local_port, PORT_WAIT).await {
            tunnel.shutdown().await;
            return Err(Error::Tunnel(format!(
                "tunnel did not open 127.0.0.1:{local_port} within {}s",
                PORT_WAIT.as_secs()
            )));
        }

        info!(local_port, "ssh tunnel ready");
        Ok(tunnel)
    }

    /// The local port the database session should connect to.
    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    /// The spawned command line with the password masked.
    pub fn displayed_command(&self) -> &str {
        &self.displayed
    }

    /// Stops the tunnel process: SIGTERM first, SIGKILL after the grace
    /// period if it lingers.
    pub async fn close(mut self) {
        self.shutdown().await;
    }

    async fn shutdown(&mut self) {
        let Some(pid) = self.child.id() else {
            return;
        };
        unsafe {
            libc::kill(pid as libc::pid_t, libc::SIGTERM);
        }
        match tokio::time::timeout(TERM_GRACE, self.child.wait()).await {
            Ok(Ok(status)) => debug!(%status, "ssh tunnel exited"),
            Ok(Err(err)) => warn!(%err, "waiting on ssh tunnel failed"),
            Err(_) => {
                warn!("ssh tunnel ignored SIGTERM, killing it");
                if let Err(err) = self.child.kill().await {
                    warn!(%err, "cannot kill ssh tunnel");
                }
            }
        }
    }
}

/// Builds the tunnel command line. Key auth runs plain `ssh`; password
/// auth wraps it in `sshpass`. Returns the secret so callers can mask it.
fn tunnel_command(
    ssh: &SshConfig,
    auth: &SshAuth,
    mysql: &MysqlConfig,
    local_port: u16,
) -> (String, Vec<String>, Option<String>) {
    let forward = format!("127.0.0.1:{}:{}:{}", local_port, mysql.host, mysql.port);
    let destination = format!("{}@{}", ssh.user, ssh.host);

    let ssh_args = |extra: &[&str]| -> Vec<String> {
        let mut args: Vec<String> = extra.iter().map(|arg| arg.to_string()).collect();
        args.extend([
            "-N".to_string(),
            "-o".to_string(),
            "ExitOnForwardFailure=yes".to_string(),
            "-L".to_string(),
            forward.clone(),
            "-p".to_string(),
            ssh.port.to_string(),
            destination.clone(),
        ]);
        args
    };

    match auth {
        SshAuth::Key(key) => ("ssh".to_string(), ssh_args(&["-i", key]), None),
        SshAuth::Password(password) => {
            let mut args = vec!["-p".to_string(), password.clone(), "ssh".to_string()];
            args.extend(ssh_args(&[]));
            ("sshpass".to_string(), args, Some(password.clone()))
        }
    }
}

fn displayed_command(program: &str, args: &[String], secret: Option<&str>) -> String {
    let shown = match secret {
        Some(secret) => mask_argument(args, secret),
        None => args.to_vec(),
    };
    let mut parts = vec![program.to_string()];
    parts.extend(shown);
    parts.join(" ")
}

/// Binds the preferred local port to prove it is free, falling back to an
/// OS-assigned one. The listener is dropped before ssh starts; a race with
/// another process grabbing the port surfaces later as a tunnel timeout.
fn pick_local_port() -> Result<u16, Error> {
    if TcpListener::bind(("127.0.0.1", DEFAULT_LOCAL_PORT)).is_ok() {
        return Ok(DEFAULT_LOCAL_PORT);
    }
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .map_err(|err| Error::Tunnel(format!("cannot find a free local port: {err}")))?;
    let port = listener
        .local_addr()
        .map_err(|err| Error::Tunnel(format!("cannot read local port: {err}")))?
        .port();
    Ok(port)
}

fn binary_on_path(name: &str) -> bool {
    let Some(path) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path).any(|dir| {
        if dir.as_os_str().is_empty() {
            return false;
        }
        Path::new(&dir).join(name).is_file()
    })
}

async fn wait_for_port(port: u16, deadline: Duration) -> bool {
    let start = tokio::time::Instant::now();
    loop {
        if TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return true;
        }
        if start.elapsed() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dolimask_core::{DEFAULT_MYSQL_PORT, DEFAULT_SSH_PORT};

    fn mysql() -> MysqlConfig {
        MysqlConfig {
            host: "db.internal".to_string(),
            port: DEFAULT_MYSQL_PORT,
            user: "dolibarr".to_string(),
            password: "dbsecret".to_string(),
            database: "dolibarr".to_string(),
        }
    }

    fn ssh() -> SshConfig {
        SshConfig {
            host: "bastion.example.com".to_string(),
            port: DEFAULT_SSH_PORT,
            user: "ops".to_string(),
            key: None,
            password: None,
        }
    }

    #[test]
    fn key_auth_runs_plain_ssh() {
        let auth = SshAuth::Key("/home/ops/.ssh/id_ed25519".to_string());
        let (program, args, secret) = tunnel_command(&ssh(), &auth, &mysql(), 3307);
        assert_eq!(program, "ssh");
        assert!(secret.is_none());
        assert_eq!(args[0], "-i");
        assert_eq!(args[1], "/home/ops/.ssh/id_ed25519");
        assert!(args.contains(&"127.0.0.1:3307:db.internal:3306".to_string()));
        assert_eq!(args.last().unwrap(), "ops@bastion.example.com");
    }

    #[test]
    fn password_auth_wraps_ssh_in_sshpass() {
        let auth = SshAuth::Password("hunter2".to_string());
        let (program, args, secret) = tunnel_command(&ssh(), &auth, &mysql(), 3310);
        assert_eq!(program, "sshpass");
        assert_eq!(secret.as_deref(), Some("hunter2"));
        assert_eq!(&args[..3], &["-p", "hunter2", "ssh"]);
        assert!(args.contains(&"127.0.0.1:3310:db.internal:3306".to_string()));
    }

    #[test]
    fn displayed_command_masks_the_password() {
        let auth = SshAuth::Password("hunter2".to_string());
        let (program, args, secret) = tunnel_command(&ssh(), &auth, &mysql(), 3307);
        let shown = displayed_command(&program, &args, secret.as_deref());
        assert!(!shown.contains("hunter2"));
        assert!(shown.contains("********"));
        assert!(shown.starts_with("sshpass"));
    }

    #[test]
    fn picks_some_free_port() {
        let port = pick_local_port().unwrap();
        assert_ne!(port, 0);
    }

    #[tokio::test]
    async fn wait_for_port_sees_a_listening_socket() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(wait_for_port(port, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn wait_for_port_gives_up_after_the_deadline() {
        // Bind then drop to get a port that is almost surely closed.
        let port = {
            let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
            listener.local_addr().unwrap().port()
        };
        assert!(!wait_for_port(port, Duration::from_millis(100)).await);
    }
}
