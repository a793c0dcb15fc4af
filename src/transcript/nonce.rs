use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::Rng;

/// Alphabet the endpoint expects, carried byte-for-byte
const NONCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMOPQRSTUVWXYZabcdefghjijklmnopqrstuvwxyz0123456789";

/// Generate a fresh `clientScreenNonce` value
///
/// 16 bytes, each an independent unbiased draw from the alphabet, encoded as
/// padless base64url (22 ASCII characters). The value is a per-request
/// anti-replay token: generate one per request and never cache or reuse it.
/// The thread-local generator is a CSPRNG, which the token requires.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let mut raw = [0u8; 16];
    for byte in raw.iter_mut() {
        *byte = NONCE_ALPHABET[rng.random_range(0..NONCE_ALPHABET.len())];
    }

    URL_SAFE_NO_PAD.encode(raw)
}
