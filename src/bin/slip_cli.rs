#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("slip_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use fault_slip::FaultReport;
    use fault_slip::fault::{
        FaultRecord, FoldFaultCharacter, SlipCharacter, ViewOptions, analyze, predict_dip_sense,
        predict_strike_sense,
    };

    const USAGE: &str = r"slip_cli (fault-slip)

USAGE:
  slip_cli report --fault <dip>/<dipdir> --bedding <dip>/<dipdir> --pitch <deg> [options]
  slip_cli classify --pitch <deg> [--cutoff <deg>]

OPTIONS (report):
  --slip <units>       Net-slip magnitude (default 10)
  --elevation <z>      Map elevation (default: elevation of O)
  --extent <half>      Half side of the view window (default 40)
  --json               Print the full report as JSON
  -h, --help           Show this help

OPTIONS (classify):
  --cutoff <deg>       Pitch of the bedding cut-off on the fault. Also read
                       as the axial-plane cut-off for the fold character.

Angles are in degrees. Pitch is measured in the fault plane from the
right-hand strike toward down-dip: 0 left-lateral, 90 normal,
180 right-lateral, 270 reverse.
";

    pub fn run() -> Result<(), String> {
        let mut args = Args::new(std::env::args().skip(1).collect());

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "report" => cmd_report(&mut args),
            "classify" => cmd_classify(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn cmd_report(args: &mut Args) -> Result<(), String> {
        let mut fault: Option<(f64, f64)> = None;
        let mut bedding: Option<(f64, f64)> = None;
        let mut pitch: Option<f64> = None;
        let mut magnitude = FaultRecord::DEFAULT_MAGNITUDE;
        let mut elevation: Option<f64> = None;
        let mut half_extent = ViewOptions::DEFAULT_HALF_EXTENT;
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fault" => fault = Some(parse_attitude("--fault", &args.value("--fault")?)?),
                "--bedding" => {
                    bedding = Some(parse_attitude("--bedding", &args.value("--bedding")?)?);
                }
                "--pitch" => pitch = Some(parse_number("--pitch", &args.value("--pitch")?)?),
                "--slip" => magnitude = parse_number("--slip", &args.value("--slip")?)?,
                "--elevation" => {
                    elevation = Some(parse_number("--elevation", &args.value("--elevation")?)?);
                }
                "--extent" => half_extent = parse_number("--extent", &args.value("--extent")?)?,
                "--json" => json = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let (fault_dip, fault_dip_direction) = fault.ok_or("missing --fault <dip>/<dipdir>")?;
        let (bedding_dip, bedding_dip_direction) =
            bedding.ok_or("missing --bedding <dip>/<dipdir>")?;
        let pitch = pitch.ok_or("missing --pitch <deg>")?;
        let options = ViewOptions::new(elevation, half_extent).map_err(|e| e.to_string())?;

        let record = FaultRecord::new(
            fault_dip,
            fault_dip_direction,
            bedding_dip,
            bedding_dip_direction,
            pitch,
            magnitude,
        )
        .map_err(|e| e.to_string())?;

        let report = FaultReport::from_analysis(&analyze(&record, &options));
        if json {
            let text = serde_json::to_string_pretty(&report).map_err(|e| format!("json: {e}"))?;
            println!("{text}");
        } else {
            print!("{report}");
        }
        Ok(())
    }

    fn cmd_classify(args: &mut Args) -> Result<(), String> {
        let mut pitch: Option<f64> = None;
        let mut cutoff: Option<f64> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pitch" => pitch = Some(parse_number("--pitch", &args.value("--pitch")?)?),
                "--cutoff" => cutoff = Some(parse_number("--cutoff", &args.value("--cutoff")?)?),
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let pitch = pitch.ok_or("missing --pitch <deg>")?;
        for line in classification(pitch, cutoff) {
            println!("{line}");
        }
        Ok(())
    }

    fn classification(pitch: f64, cutoff: Option<f64>) -> Vec<String> {
        let mut lines = vec![format!("slip       {}", SlipCharacter::from_pitch(pitch).label())];

        if let Some(cutoff) = cutoff {
            let dip = predict_dip_sense(pitch, cutoff).map_or("undefined", |s| s.label());
            let strike = predict_strike_sense(pitch, cutoff).map_or("undefined", |s| s.label());
            let fold = FoldFaultCharacter::from_pitches(pitch, cutoff).label();
            lines.push(format!("section    {dip}"));
            lines.push(format!("map        {strike}"));
            lines.push(format!("fold       {fold}"));
        }
        lines
    }

    fn parse_number(flag: &str, raw: &str) -> Result<f64, String> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("{flag}: `{raw}` is not a number"))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("{flag}: `{raw}` is not finite"))
        }
    }

    /// Parses `dip/dipdir`, e.g. `50/156`.
    fn parse_attitude(flag: &str, raw: &str) -> Result<(f64, f64), String> {
        let (dip, dip_direction) = raw
            .split_once('/')
            .ok_or_else(|| format!("{flag}: expected <dip>/<dipdir>, got `{raw}`"))?;
        Ok((parse_number(flag, dip)?, parse_number(flag, dip_direction)?))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next().ok_or_else(|| format!("missing value for {flag}"))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::classification;

        #[test]
        fn classify_without_cutoff_prints_slip_only() {
            assert_eq!(classification(90.0, None), ["slip       Normal"]);
        }

        #[test]
        fn classify_with_cutoff_prints_fold_character() {
            let lines = classification(40.0, Some(9.4));
            assert_eq!(lines.len(), 4);
            assert_eq!(lines[0], "slip       Left-lateral normal");
            assert_eq!(lines[1], "section    apparent normal");
            assert_eq!(lines[2], "map        apparent right-lateral");
            assert_eq!(lines[3], "fold       alternating apparent normal and reverse");

            let parallel = classification(120.0, Some(120.0));
            assert_eq!(parallel[3], "fold       constant apparent sense");
        }
    }
}
