// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: digest
// Purpose: Fixed-output digest computation behind one algorithm enum.

use clap::ValueEnum;
use digest::{Digest, DynDigest};
use skein::{consts::U32, Skein1024, Skein256, Skein512};
use std::fmt;
use strum::EnumIter;

/// Digest algorithms available to a matching run, surfaced via the CLI
/// `--algorithm` flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, EnumIter)]
#[value(rename_all = "kebab-case")]
pub enum DigestAlgorithm {
	Belthash,
	Blake2b,
	Blake2s,
	Blake3,
	Fsb160,
	Fsb224,
	Fsb256,
	Fsb384,
	Fsb512,
	Gost94,
	Gost94ua,
	Groestl,
	Jh224,
	Jh256,
	Jh384,
	Jh512,
	Md2,
	Md4,
	Md5,
	Ripemd160,
	Ripemd320,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shabal192,
	Shabal224,
	Shabal256,
	Shabal384,
	Shabal512,
	Skein256,
	Skein512,
	Skein1024,
	Sm3,
	Streebog256,
	Streebog512,
	Tiger,
	Whirlpool,
}

impl DigestAlgorithm {
	pub fn canonical_name(self) -> &'static str {
		match self {
			Self::Belthash => "belthash",
			Self::Blake2b => "blake2b",
			Self::Blake2s => "blake2s",
			Self::Blake3 => "blake3",
			Self::Fsb160 => "fsb160",
			Self::Fsb224 => "fsb224",
			Self::Fsb256 => "fsb256",
			Self::Fsb384 => "fsb384",
			Self::Fsb512 => "fsb512",
			Self::Gost94 => "gost94",
			Self::Gost94ua => "gost94ua",
			Self::Groestl => "groestl",
			Self::Jh224 => "jh224",
			Self::Jh256 => "jh256",
			Self::Jh384 => "jh384",
			Self::Jh512 => "jh512",
			Self::Md2 => "md2",
			Self::Md4 => "md4",
			Self::Md5 => "md5",
			Self::Ripemd160 => "ripemd160",
			Self::Ripemd320 => "ripemd320",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
			Self::Sha3_224 => "sha3-224",
			Self::Sha3_256 => "sha3-256",
			Self::Sha3_384 => "sha3-384",
			Self::Sha3_512 => "sha3-512",
			Self::Shabal192 => "shabal192",
			Self::Shabal224 => "shabal224",
			Self::Shabal256 => "shabal256",
			Self::Shabal384 => "shabal384",
			Self::Shabal512 => "shabal512",
			Self::Skein256 => "skein256",
			Self::Skein512 => "skein512",
			Self::Skein1024 => "skein1024",
			Self::Sm3 => "sm3",
			Self::Streebog256 => "streebog256",
			Self::Streebog512 => "streebog512",
			Self::Tiger => "tiger",
			Self::Whirlpool => "whirlpool",
		}
	}

	/// Width of this algorithm's digest in hex characters.
	pub fn hex_width(self) -> usize {
		Digester::new(self).output_size() * 2
	}
}

impl fmt::Display for DigestAlgorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical_name())
	}
}

macro_rules! select_digester {
	($alg:expr, $($variant:pat => $hasher:expr),+ $(,)?) => {
		match $alg {
			$(
				$variant => Box::new($hasher),
			)+
		}
	};
}

/// One reusable hasher instance. The inner state is reset after every
/// digest, so a worker can hold a single `Digester` for its whole run.
#[derive(Clone)]
pub struct Digester {
	digest: Box<dyn DynDigest>,
}

impl Digester {
	pub fn new(algorithm: DigestAlgorithm) -> Self {
		use DigestAlgorithm as Alg;
		Self {
			digest: select_digester!(algorithm,
				Alg::Belthash => belt_hash::BeltHash::new(),
				Alg::Blake2b => blake2::Blake2b512::new(),
				Alg::Blake2s => blake2::Blake2s256::new(),
				Alg::Blake3 => blake3::Hasher::new(),
				Alg::Fsb160 => fsb::Fsb160::new(),
				Alg::Fsb224 => fsb::Fsb224::new(),
				Alg::Fsb256 => fsb::Fsb256::new(),
				Alg::Fsb384 => fsb::Fsb384::new(),
				Alg::Fsb512 => fsb::Fsb512::new(),
				Alg::Gost94 => gost94::Gost94Test::new(),
				Alg::Gost94ua => gost94::Gost94UA::new(),
				Alg::Groestl => groestl::Groestl256::new(),
				Alg::Jh224 => jh::Jh224::new(),
				Alg::Jh256 => jh::Jh256::new(),
				Alg::Jh384 => jh::Jh384::new(),
				Alg::Jh512 => jh::Jh512::new(),
				Alg::Md2 => md2::Md2::new(),
				Alg::Md4 => md4::Md4::new(),
				Alg::Md5 => md5::Md5::new(),
				Alg::Ripemd160 => ripemd::Ripemd160::new(),
				Alg::Ripemd320 => ripemd::Ripemd320::new(),
				Alg::Sha1 => sha1::Sha1::new(),
				Alg::Sha224 => sha2::Sha224::new(),
				Alg::Sha256 => sha2::Sha256::new(),
				Alg::Sha384 => sha2::Sha384::new(),
				Alg::Sha512 => sha2::Sha512::new(),
				Alg::Sha3_224 => sha3::Sha3_224::new(),
				Alg::Sha3_256 => sha3::Sha3_256::new(),
				Alg::Sha3_384 => sha3::Sha3_384::new(),
				Alg::Sha3_512 => sha3::Sha3_512::new(),
				Alg::Shabal192 => shabal::Shabal192::new(),
				Alg::Shabal224 => shabal::Shabal224::new(),
				Alg::Shabal256 => shabal::Shabal256::new(),
				Alg::Shabal384 => shabal::Shabal384::new(),
				Alg::Shabal512 => shabal::Shabal512::new(),
				Alg::Skein256 => Skein256::<U32>::new(),
				Alg::Skein512 => Skein512::<U32>::new(),
				Alg::Skein1024 => Skein1024::<U32>::new(),
				Alg::Sm3 => sm3::Sm3::new(),
				Alg::Streebog256 => streebog::Streebog256::new(),
				Alg::Streebog512 => streebog::Streebog512::new(),
				Alg::Tiger => tiger::Tiger::new(),
				Alg::Whirlpool => whirlpool::Whirlpool::new(),
			),
		}
	}

	pub fn digest_bytes(&mut self, data: &[u8]) -> Vec<u8> {
		self.digest.update(data);
		self.digest.finalize_reset().to_vec()
	}

	pub fn hex_digest(&mut self, data: &[u8]) -> String {
		hex::encode(self.digest_bytes(data))
	}

	pub fn output_size(&self) -> usize {
		self.digest.output_size()
	}
}
