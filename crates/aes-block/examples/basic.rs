//! Encrypts and decrypts the FIPS-197 Appendix C.1 vector with a
//! pre-expanded 128-bit key schedule.

use aes_block::AesCipher;

// Expanded schedule for the cipher key 000102030405060708090a0b0c0d0e0f.
const SCHEDULE_HEX: &str = "000102030405060708090a0b0c0d0e0f\
    d6aa74fdd2af72fadaa678f1d6ab76fe\
    b692cf0b643dbdf1be9bc5006830b3fe\
    b6ff744ed2c2c9bf6c590cbf0469bf41\
    47f7f7bc95353e03f96c32bcfd058dfd\
    3caaa3e8a99f9deb50f3af57adf622aa\
    5e390f7df7a69296a7553dc10aa31f6b\
    14f9701ae35fe28c440adf4d4ea9c026\
    47438735a41c65b9e016baf4aebf7ad2\
    549932d1f08557681093ed9cbe2c974e\
    13111d7fe3944a17f307a78b4d2b30c5";

fn main() {
    let schedule = hex::decode(SCHEDULE_HEX).expect("valid hex");
    let cipher = AesCipher::from_expanded_key(&schedule).expect("valid schedule");

    let plaintext = hex::decode("00112233445566778899aabbccddeeff").expect("valid hex");
    let ciphertext = cipher.encrypt_block(&plaintext).expect("block size ok");
    let decrypted = cipher.decrypt_block(&ciphertext).expect("block size ok");

    println!("rounds:     {}", cipher.rounds());
    println!("plaintext:  {}", hex::encode(&plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));

    assert_eq!(hex::encode(ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
    assert_eq!(decrypted.as_slice(), plaintext.as_slice());
    println!("example succeeded; output matches the FIPS-197 vector");
}
