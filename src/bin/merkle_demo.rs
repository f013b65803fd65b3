//! Interactive driver: grows a tree one leaf at a time, rendering the levels
//! and re-proving every inserted leaf after each addition.

use std::env;
use std::process::ExitCode;

use merkle_log::render::{hex_prefix, render_tree};
use merkle_log::{Digest, HashAlgo, MerkleTree, ProofBuilder};

/// 16-byte sample digests fed to the tree in order.
const SAMPLE_LEAVES: [[u8; 16]; 16] = [
    [
        0x61, 0x4e, 0xef, 0x5f, 0x3e, 0xc0, 0x73, 0xb9, 0xcc, 0x4c, 0x09, 0xd2, 0x11, 0xe2, 0x75,
        0xaa,
    ],
    [
        0xb7, 0x91, 0x3a, 0xa1, 0x5c, 0x43, 0xbe, 0x7d, 0x53, 0x4b, 0x4e, 0xec, 0x6e, 0x99, 0xe8,
        0xa0,
    ],
    [
        0x29, 0xbf, 0xe3, 0x72, 0x86, 0x57, 0x37, 0xfe, 0x2b, 0xfc, 0xfd, 0x36, 0x18, 0xb1, 0xda,
        0x7d,
    ],
    [
        0x7a, 0x67, 0x58, 0x83, 0xb1, 0xc1, 0x17, 0xe2, 0x67, 0x47, 0x0d, 0xce, 0x52, 0xeb, 0xa5,
        0x18,
    ],
    [
        0x12, 0x47, 0x0f, 0xe4, 0x06, 0xd4, 0x40, 0x17, 0xd9, 0x6e, 0xab, 0x37, 0xdd, 0x65, 0xfc,
        0x14,
    ],
    [
        0xd5, 0x12, 0xef, 0x9a, 0xf0, 0x61, 0x69, 0x86, 0x1d, 0x2e, 0x4d, 0x8d, 0xa2, 0xe4, 0x9e,
        0x72,
    ],
    [
        0x61, 0xcc, 0xef, 0x5f, 0x3e, 0xc0, 0x73, 0xb9, 0x7a, 0x4c, 0x09, 0xd2, 0x11, 0xe2, 0x75,
        0xaa,
    ],
    [
        0xb7, 0xcc, 0x3a, 0xa1, 0x5c, 0x43, 0xbe, 0x7d, 0xcc, 0x4b, 0x4e, 0xec, 0x6e, 0x99, 0xe8,
        0xa0,
    ],
    [
        0x29, 0xcc, 0xe3, 0x72, 0x86, 0x57, 0x37, 0xfe, 0xcc, 0xfc, 0xfd, 0x36, 0x18, 0xb1, 0xda,
        0x7d,
    ],
    [
        0x7a, 0xcc, 0x58, 0x83, 0xb1, 0xc1, 0x17, 0xe2, 0xcc, 0x47, 0x0d, 0xce, 0x52, 0xeb, 0xa5,
        0x18,
    ],
    [
        0x61, 0x4e, 0xb1, 0x5f, 0x3e, 0xc0, 0x73, 0xb9, 0x7a, 0x4c, 0x09, 0xd2, 0x11, 0xe2, 0x75,
        0xaa,
    ],
    [
        0xb7, 0x91, 0xef, 0xa1, 0x5c, 0x43, 0xbe, 0x7d, 0xcc, 0x4b, 0x4e, 0xec, 0x6e, 0x99, 0xe8,
        0xa0,
    ],
    [
        0x29, 0xbf, 0xef, 0x72, 0x86, 0x57, 0x37, 0xfe, 0xcc, 0xfc, 0xfd, 0x36, 0x18, 0xb1, 0xda,
        0x7d,
    ],
    [
        0x7a, 0x67, 0xef, 0x83, 0xb1, 0xc1, 0x17, 0xe2, 0xcc, 0x47, 0x0d, 0xce, 0x52, 0xeb, 0xa5,
        0x18,
    ],
    [
        0xd9, 0xbc, 0xef, 0x74, 0x86, 0x57, 0x37, 0xfe, 0xcc, 0xfc, 0xfd, 0x36, 0x18, 0xb1, 0xda,
        0x7d,
    ],
    [
        0xda, 0x6c, 0xef, 0x8f, 0xb1, 0xc1, 0x17, 0xe2, 0xcc, 0x47, 0x0d, 0xce, 0x52, 0xeb, 0xa5,
        0x18,
    ],
];

const PRINT_WIDTH: usize = 4;

fn parse_algo(name: &str) -> Option<HashAlgo> {
    match name {
        "blake2s128" => Some(HashAlgo::Blake2s128),
        "blake2s256" => Some(HashAlgo::Blake2s256),
        "blake3" => Some(HashAlgo::Blake3),
        _ => None,
    }
}

fn sample_digest(algo: HashAlgo, index: usize) -> Digest {
    let sample = &SAMPLE_LEAVES[index % SAMPLE_LEAVES.len()];
    let mut bytes = Vec::with_capacity(algo.digest_width());
    while bytes.len() < algo.digest_width() {
        bytes.extend_from_slice(sample);
    }
    bytes.truncate(algo.digest_width());
    Digest::new(bytes)
}

fn main() -> ExitCode {
    let mut algo = HashAlgo::Blake2s128;
    let mut columns = 120usize;
    let mut leaves = SAMPLE_LEAVES.len();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--algo" => {
                let Some(value) = args.next().and_then(|name| parse_algo(&name)) else {
                    eprintln!("--algo expects blake2s128, blake2s256 or blake3");
                    return ExitCode::FAILURE;
                };
                algo = value;
            }
            "--columns" => {
                let Some(value) = args.next().and_then(|raw| raw.parse().ok()) else {
                    eprintln!("--columns expects a number");
                    return ExitCode::FAILURE;
                };
                columns = value;
            }
            "--leaves" => {
                let Some(value) = args.next().and_then(|raw| raw.parse().ok()) else {
                    eprintln!("--leaves expects a number");
                    return ExitCode::FAILURE;
                };
                leaves = value;
            }
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("usage: merkle_demo [--algo NAME] [--columns N] [--leaves N]");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("Testing Merkle tree ({:?}, {} leaves)...", algo, leaves);

    let mut tree = MerkleTree::new(algo);
    for i in 0..leaves {
        let digest = sample_digest(algo, i);
        if let Err(err) = tree.add(digest) {
            eprintln!("add failed at leaf {i}: {err}");
            return ExitCode::FAILURE;
        }
        print!("{}", render_tree(&tree, PRINT_WIDTH, columns));

        let root = match tree.root() {
            Ok(root) => root,
            Err(err) => {
                eprintln!("root unavailable: {err}");
                return ExitCode::FAILURE;
            }
        };
        for j in 0..=i {
            let leaf = sample_digest(algo, j);
            match ProofBuilder::build(&tree, &leaf) {
                Ok(proof) => {
                    let verdict = if proof.validate(&leaf, &root) {
                        "VALID"
                    } else {
                        "INVALID"
                    };
                    let path: Vec<String> = proof
                        .steps()
                        .iter()
                        .map(|step| hex_prefix(&step.sibling, PRINT_WIDTH))
                        .collect();
                    println!(
                        "Proof for {} ({verdict}) = {}",
                        hex_prefix(&leaf, PRINT_WIDTH),
                        path.join("|")
                    );
                }
                Err(err) => {
                    eprintln!("proof failed for leaf {j}: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
