//! Static client-side reference text.
//!
//! Once a transfer server is up, the interesting half of the job happens on
//! the client machine. These blocks show the matching fetch/push one-liners
//! with `<SERVER_IP>`/`<PORT>` placeholders. Inert display content; nothing
//! here is templated from user input.

use std::fmt;

/// The four server kinds the tool generates commands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    Updog,
    SimpleHttp,
    Ftp,
    Tftp,
}

impl ServerKind {
    /// All kinds, in the order the tool presents them.
    pub const ALL: [ServerKind; 4] = [
        ServerKind::Updog,
        ServerKind::SimpleHttp,
        ServerKind::Ftp,
        ServerKind::Tftp,
    ];

    /// Parse a server kind from its CLI name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "updog" => Some(ServerKind::Updog),
            "simple-http" | "simplehttp" => Some(ServerKind::SimpleHttp),
            "ftp" => Some(ServerKind::Ftp),
            "tftp" => Some(ServerKind::Tftp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServerKind::Updog => "updog",
            ServerKind::SimpleHttp => "simple-http",
            ServerKind::Ftp => "ftp",
            ServerKind::Tftp => "tftp",
        }
    }

    /// Human-facing title, as shown in the TUI tabs and reference headers.
    pub fn title(&self) -> &'static str {
        match self {
            ServerKind::Updog => "Updog Web Server",
            ServerKind::SimpleHttp => "Python SimpleHTTPServer",
            ServerKind::Ftp => "Twisted FTP Server",
            ServerKind::Tftp => "ATFTPD TFTP Server",
        }
    }
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client-side usage examples for one server kind.
pub fn client_examples(kind: ServerKind) -> &'static str {
    match kind {
        ServerKind::Updog => {
            "# Fetch a file from the client side:\n\
             curl -O http://<SERVER_IP>:<PORT>/file.bin\n\
             # Upload a file (updog accepts POST uploads):\n\
             curl -F 'file=@out.txt' http://<SERVER_IP>:<PORT>/upload"
        }
        ServerKind::SimpleHttp => {
            "# Fetch a file from the client side:\n\
             wget http://<SERVER_IP>:<PORT>/file.bin\n\
             curl -O http://<SERVER_IP>:<PORT>/file.bin"
        }
        ServerKind::Ftp => {
            "# Push a file from the client side:\n\
             curl -T out.txt ftp://<SERVER_IP>:<FTP_PORT>"
        }
        ServerKind::Tftp => {
            "# Fetch a file from a Windows client:\n\
             tftp -i <SERVER_IP> GET file.bin\n\
             # Fetch a file from a Linux client:\n\
             tftp <SERVER_IP> -c get file.bin"
        }
    }
}
