use std::error::Error;
use std::time::Instant;

use clap::Parser;
use image::{ImageBuffer, Rgb};
use log::{debug, info};
use rand::{self, Rng};
use rayon::prelude::*;

use raytracer_core::raytracing::math::{
    color, point, rotate_z, scale, translate, Color, Ray, Transform, Vec3, Vec4,
};
use raytracer_core::{hit, intersect_all, Material, Shape, Sphere};

mod logger;

/// Renders the silhouette of a single transformed sphere.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// the path where the rendered image is saved
    #[arg(short, long, default_value = "sphere.png")]
    output: String,
    /// width and height of the image in pixels
    #[arg(long, default_value_t = 256)]
    size: u32,
    /// the number of rays shot per pixel
    #[arg(short, long, default_value_t = 4)]
    sample_rate: u32,
    /// non-uniform scale applied to the sphere
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = vec![1.0, 1.0, 1.0])]
    scale: Vec<f64>,
    /// translation applied after scaling and rotating
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = vec![0.0, 0.0, 0.0])]
    translate: Vec<f64>,
    /// rotation around the z axis, in radians
    #[arg(long, default_value_t = 0.0)]
    rotate_z: f64,
    /// color of the sphere
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = vec![1.0, 0.2, 1.0])]
    color: Vec<f64>,
    /// increase logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// the eye looks along +z toward a square wall of this size at this depth
const WALL_Z: f64 = 10.0;
const WALL_SIZE: f64 = 7.0;

fn to_rgb(value: Color) -> Rgb<u8> {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([channel(value.x), channel(value.y), channel(value.z)])
}

// row-major index, computed in usize so large images do not overflow u32
fn pixel_index(x: u32, y: u32, size: u32) -> usize {
    x as usize + size as usize * y as usize
}

fn build_sphere(args: &Args) -> Sphere {
    let m = scale(args.scale[0], args.scale[1], args.scale[2])
        .then(&rotate_z(args.rotate_z))
        .then(&translate(
            args.translate[0],
            args.translate[1],
            args.translate[2],
        ));
    let mut sphere = Sphere::with_transform(Transform::new(m));
    sphere.set_material(Material {
        color: color(args.color[0], args.color[1], args.color[2]),
        ..Material::default()
    });
    sphere
}

fn cast(shapes: &[Box<dyn Shape>], ray: &Ray) -> Color {
    let interactions = intersect_all(shapes, ray);
    match hit(&interactions) {
        Some(interaction) => interaction.shape.material().color,
        None => Vec3::zero(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::init_logger(logger::level_from_verbosity(args.verbose));

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(build_sphere(&args))];
    debug!("scene: {:?}", shapes);

    let size = args.size.max(1);
    let eye: Vec4 = point(0.0, 0.0, -5.0);
    let pixel_size = WALL_SIZE / size as f64;
    let half = WALL_SIZE / 2.0;
    let samples = args.sample_rate.max(1);

    let mut pixels = vec![Vec3::zero(); pixel_index(0, size, size)];
    let start = Instant::now();
    // rows are independent and the shapes are only read while rendering
    pixels
        .par_chunks_mut(size as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                for _ in 0..samples {
                    let x_offset = rand::thread_rng().gen_range(-0.5..0.5);
                    let y_offset = rand::thread_rng().gen_range(-0.5..0.5);
                    let world_x = -half + pixel_size * (x as f64 + 0.5 + x_offset);
                    let world_y = half - pixel_size * (y as f64 + 0.5 + y_offset);
                    let target = point(world_x, world_y, WALL_Z);
                    let ray = Ray::new(eye, (target - eye).normalize());
                    *pixel += cast(&shapes, &ray) / samples as f64;
                }
            }
        });
    info!("rendered {}x{} pixels in {:?}", size, size, start.elapsed());

    let mut buffer: ImageBuffer<Rgb<u8>, Vec<_>> = ImageBuffer::new(size, size);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = to_rgb(pixels[pixel_index(x, y, size)]);
    }
    buffer.save(&args.output)?;
    info!("saved {}", args.output);
    Ok(())
}
