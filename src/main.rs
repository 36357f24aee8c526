use sierpinski::config::RenderConfig;
use sierpinski::fractal;

fn main() -> Result<(), image::ImageError> {
    let config = RenderConfig::default();

    let renderer = fractal::render(&config);
    renderer.save(&config.output_path)?;

    println!(
        "Sierpinski Triangle generated with recursion level {}.",
        config.depth
    );
    println!("Image saved as {}", config.output_path.display());

    Ok(())
}
