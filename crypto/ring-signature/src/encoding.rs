// Copyright (c) 2023-2026 The Umbra Foundation

//! Hex-wrapped JSON wire form of an MLSAG.
//!
//! A signature travels as `"0x" + hex(utf8(json))` where the JSON object is
//! `{ring, c, responses, message, keyImages}`, points as compressed hex
//! strings and scalars as decimal strings.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use umbra_crypto_curve::{CurveContext, Point};

use crate::{Error, Mlsag};

#[derive(Deserialize, Serialize)]
struct MlsagWire {
    ring: Vec<Vec<String>>,
    c: String,
    responses: Vec<Vec<String>>,
    message: String,
    #[serde(rename = "keyImages")]
    key_images: Vec<String>,
}

impl Mlsag {
    /// Encode to the hex-wrapped JSON wire form.
    pub fn encode(&self) -> Result<String, Error> {
        let wire = MlsagWire {
            ring: self
                .ring
                .iter()
                .map(|row| row.iter().map(Point::compress).collect())
                .collect(),
            c: self.challenge.to_str_radix(10),
            responses: self
                .responses
                .iter()
                .map(|row| row.iter().map(|r| r.to_str_radix(10)).collect())
                .collect(),
            message: self.message.clone(),
            key_images: self.key_images.iter().map(Point::compress).collect(),
        };
        let json = serde_json::to_string(&wire).map_err(|_| Error::InvalidEncoding)?;
        Ok(format!("0x{}", hex::encode(json)))
    }

    /// Decode from the hex-wrapped JSON wire form, validating every point.
    pub fn decode(ctx: &CurveContext, encoded: &str) -> Result<Self, Error> {
        let digits = encoded.strip_prefix("0x").ok_or(Error::InvalidEncoding)?;
        let bytes = hex::decode(digits).map_err(|_| Error::InvalidEncoding)?;
        let json = String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding)?;
        let wire: MlsagWire =
            serde_json::from_str(&json).map_err(|_| Error::InvalidEncoding)?;

        let decode_row = |row: &[String]| -> Result<Vec<Point>, Error> {
            row.iter()
                .map(|p| Point::decompress(ctx, p).map_err(Error::from))
                .collect()
        };
        let parse_scalar = |digits: &str| -> Result<BigUint, Error> {
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidEncoding)
        };

        Ok(Self {
            message: wire.message,
            ring: wire
                .ring
                .iter()
                .map(|row| decode_row(row))
                .collect::<Result<_, _>>()?,
            challenge: parse_scalar(&wire.c)?,
            responses: wire
                .responses
                .iter()
                .map(|row| row.iter().map(|r| parse_scalar(r)).collect())
                .collect::<Result<_, _>>()?,
            key_images: wire
                .key_images
                .iter()
                .map(|p| Point::decompress(ctx, p).map_err(Error::from))
                .collect::<Result<_, _>>()?,
        })
    }
}
