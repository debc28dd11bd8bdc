use artshow_forms::forms::render_bid_sheets_for_artists;
use artshow_forms::{Artist, ShowConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artshow_forms=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // usage: bid-sheets <show.toml> <artists.json> <output.pdf>
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [config, artists, output] = args.as_slice() else {
        eprintln!("usage: bid-sheets <show.toml> <artists.json> <output.pdf>");
        std::process::exit(2);
    };

    let config = ShowConfig::load(config).expect("can load show config");
    let artists = std::fs::read_to_string(artists).expect("can read artists");
    let artists: Vec<Artist> = serde_json::from_str(&artists).expect("artists are valid JSON");

    let template = config.bid_sheet_template().expect("can load bid sheet template");
    let fonts = config.fonts().expect("can load fonts");

    // render everything before touching the output file, so a failure leaves no partial PDF
    let mut pdf = Vec::new();
    if let Err(e) = render_bid_sheets_for_artists(template, fonts, &config.sheet_layout(), &artists, &mut pdf) {
        eprintln!("failed to render bid sheets: {e}");
        std::process::exit(1);
    }
    std::fs::write(output, pdf).expect("can write output");
}
