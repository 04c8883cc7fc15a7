use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// One-shot HTTP server on localhost. Answers the first request with
/// `status` and `body`, then returns the request line it received.
pub struct OneShotServer {
    pub wiki_base: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
        let addr = listener.local_addr().expect("test server address");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept test connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone test stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            loop {
                let mut header = String::new();
                let n = reader.read_line(&mut header).expect("read header");
                if n <= 2 {
                    break;
                }
            }

            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");
            request_line
        });

        Self {
            wiki_base: format!("http://{addr}/wiki"),
            handle,
        }
    }

    /// Request line of the single request served, e.g. `GET /wiki/Tackle_(move) HTTP/1.1`.
    pub fn request_line(self) -> String {
        self.handle.join().expect("test server thread panicked")
    }
}

/// Base URL pointing at a port nothing listens on.
pub fn refused_wiki_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/wiki")
}

/// Minimal move page with a learnset table listing `rows` as
/// `(pokemon, optional form note)`.
pub fn move_page(rows: &[(&str, Option<&str>)]) -> String {
    let mut table = String::from("<table class=\"roundy\"><tbody>");
    for (name, form) in rows {
        table.push_str("<tr><td>");
        table.push_str(&format!(
            "<a href=\"/wiki/{name}_(Pok%C3%A9mon)\" title=\"{name} (Pokémon)\">{name}</a>"
        ));
        if let Some(form) = form {
            table.push_str(&format!("<br><small>{form}</small>"));
        }
        table.push_str("</td></tr>");
    }
    table.push_str("</tbody></table>");

    format!(
        "<!DOCTYPE html><html><head><title>Move</title></head><body>\
         <h2><span class=\"mw-headline\" id=\"Effect\">Effect</span></h2><p>Deals damage.</p>\
         <h2><span class=\"mw-headline\" id=\"Learnset\">Learnset</span></h2>\
         <h3><span class=\"mw-headline\">By leveling up</span></h3>{table}\
         <h2><span class=\"mw-headline\" id=\"Trivia\">Trivia</span></h2>\
         <table><tr><td><a title=\"Missingno. (Pokémon)\">Missingno.</a></td></tr></table>\
         </body></html>"
    )
}
