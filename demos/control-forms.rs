use artshow_forms::forms::render_control_forms;
use artshow_forms::{Artist, ShowConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artshow_forms=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // usage: control-forms <show.toml> <artists.json> <output.pdf>
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [config, artists, output] = args.as_slice() else {
        eprintln!("usage: control-forms <show.toml> <artists.json> <output.pdf>");
        std::process::exit(2);
    };

    let config = ShowConfig::load(config).expect("can load show config");
    let artists = std::fs::read_to_string(artists).expect("can read artists");
    let mut artists: Vec<Artist> = serde_json::from_str(&artists).expect("artists are valid JSON");
    artists.sort_by_key(|artist| artist.artist_id);

    let template = config.control_form_template().expect("can load control form template");
    let fonts = config.fonts().expect("can load fonts");

    let mut pdf = Vec::new();
    match render_control_forms(template, fonts, &config.show_year, &artists, &mut pdf) {
        Ok(composed) => println!("{} control form pages", composed.pages),
        Err(e) => {
            eprintln!("failed to render control forms: {e}");
            std::process::exit(1);
        }
    }
    std::fs::write(output, pdf).expect("can write output");
}
