//! PNG images and cubemaps, decoded to 8-bit RGBA

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width:  u32,
    pub height: u32,
    /// Row-major RGBA, top row first
    pub pixels: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Image> {
        let expected = width as usize * height as usize * 4;

        if pixels.len() != expected {
            return Err(Error::Image(format!(
                "expected {} bytes for {}x{} rgba, got {}",
                expected,
                width,
                height,
                pixels.len(),
            )));
        }

        Ok(Image { width, height, pixels })
    }

    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Image> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let image = Image::decode_png(BufReader::new(file))?;

        info!(
            "Loaded image \"{}\" ({}x{})",
            path.display(),
            image.width,
            image.height,
        );

        Ok(image)
    }

    pub fn decode_png<R: Read>(reader: R) -> Result<Image> {
        let mut decoder = png::Decoder::new(reader);

        // Palette to RGB(A), low bit depths up to 8, 16-bit down to 8
        decoder.set_transformations(
            png::Transformations::EXPAND | png::Transformations::STRIP_16
        );

        let mut reader = decoder.read_info()?;

        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        buffer.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(Error::Image(format!(
                "unsupported bit depth {:?}",
                info.bit_depth,
            )));
        }

        let pixels = match info.color_type {
            png::ColorType::Rgba => buffer,
            png::ColorType::Rgb => buffer.chunks_exact(3)
                .flat_map(|px| vec![px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::Grayscale => buffer.iter()
                .flat_map(|&v| vec![v, v, v, 255])
                .collect(),
            png::ColorType::GrayscaleAlpha => buffer.chunks_exact(2)
                .flat_map(|px| vec![px[0], px[0], px[0], px[1]])
                .collect(),
            other => return Err(Error::Image(format!(
                "unsupported color type {:?}",
                other,
            ))),
        };

        Image::new(info.width, info.height, pixels)
    }

    /// RGBA at column `x`, row `y`; `None` outside the image
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.pixels[i..i + 4];

        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Cubemap faces in upload order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            CubeFace::PosX => "posx",
            CubeFace::NegX => "negx",
            CubeFace::PosY => "posy",
            CubeFace::NegY => "negy",
            CubeFace::PosZ => "posz",
            CubeFace::NegZ => "negz",
        }
    }
}

pub struct Cubemap {
    faces: Vec<Image>,
}

impl Cubemap {
    /// Faces must be square and share one size
    pub fn from_faces(faces: [Image; 6]) -> Result<Cubemap> {
        let size = faces[0].width;

        for (face, image) in CubeFace::ALL.iter().zip(faces.iter()) {
            if image.width != image.height {
                return Err(Error::Image(format!(
                    "cubemap face {} is not square ({}x{})",
                    face.suffix(),
                    image.width,
                    image.height,
                )));
            }

            if image.width != size {
                return Err(Error::Image(format!(
                    "cubemap face {} is {}px, expected {}px",
                    face.suffix(),
                    image.width,
                    size,
                )));
            }
        }

        Ok(Cubemap { faces: Vec::from(faces) })
    }

    /// Load `<dir>/<prefix>_<suffix>.png` for every face
    pub fn load<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Cubemap> {
        let dir = dir.as_ref();

        let load_face = |face: CubeFace| Image::load_png(
            dir.join(format!("{}_{}.png", prefix, face.suffix()))
        );

        Cubemap::from_faces([
            load_face(CubeFace::PosX)?,
            load_face(CubeFace::NegX)?,
            load_face(CubeFace::PosY)?,
            load_face(CubeFace::NegY)?,
            load_face(CubeFace::PosZ)?,
            load_face(CubeFace::NegZ)?,
        ])
    }

    pub fn face(&self, face: CubeFace) -> &Image {
        &self.faces[face as usize]
    }

    pub fn size(&self) -> u32 {
        self.faces[0].width
    }
}
