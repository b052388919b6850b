//! Discovery tool output parsing

/// Every line reporting a reachable host contains this phrase, e.g.
/// `Nmap scan report for 127.0.0.50`.
const HOST_MARKER: &str = "scan report for ";

/// Extracts reachable host entries from a discovery tool transcript.
///
/// The transcript is scanned line by line; each line containing
/// [`HOST_MARKER`] yields one entry formed from whatever follows the
/// marker. All other lines are ignored. Order is preserved and duplicates
/// are kept; a transcript with no marker lines yields an empty list.
pub fn parse_transcript(transcript: &str) -> Vec<String> {
    transcript
        .lines()
        .filter_map(|line| {
            line.find(HOST_MARKER)
                .map(|pos| line[pos + HOST_MARKER.len()..].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "\
Starting Nmap 7.80 ( https://nmap.org ) at 2020-04-01 12:00 UTC
Nmap scan report for 127.0.0.50
Host is up (0.00042s latency).
Nmap scan report for 127.0.0.51
Host is up (0.00087s latency).
Nmap done: 201 IP addresses (2 hosts up) scanned in 3.04 seconds
";

    #[test]
    fn extracts_hosts_in_order() {
        assert_eq!(parse_transcript(TRANSCRIPT), vec!["127.0.0.50", "127.0.0.51"]);
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_transcript(TRANSCRIPT), parse_transcript(TRANSCRIPT));
    }

    #[test]
    fn no_marker_lines_yield_empty_list() {
        let transcript = "Starting Nmap 7.80\nNmap done: 0 IP addresses scanned\n";
        assert!(parse_transcript(transcript).is_empty());
        assert!(parse_transcript("").is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let transcript = "\
Nmap scan report for 10.0.0.1
Nmap scan report for 10.0.0.1
";
        assert_eq!(parse_transcript(transcript), vec!["10.0.0.1", "10.0.0.1"]);
    }

    #[test]
    fn keeps_everything_after_the_marker() {
        // Reverse-resolved hosts keep their full "name (addr)" form
        let transcript = "Nmap scan report for router.lan (192.168.1.1)\n";
        assert_eq!(
            parse_transcript(transcript),
            vec!["router.lan (192.168.1.1)"]
        );
    }
}
