use std::path::Path;

use assert_cmd::Command;

pub fn ossify_cmd() -> Command {
	let mut cmd = Command::cargo_bin("ossify").unwrap_or_else(|e| panic!("missing binary: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("OSSIFY_LOG");
	cmd
}

pub const PROPRIETARY_FILE: &str = "/*\n * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC \
                                    <hello@stalw.art>\n *\n * SPDX-License-Identifier: \
                                    LicenseRef-SEL\n */\n\npub struct Undelete;\n";

pub const MIXED_FILE: &str = "// SPDX-License-Identifier: AGPL-3.0-only OR \
                              LicenseRef-SEL\n\nuse common::Server;\n\n// \
                              SPDX-SnippetBegin\n// SPDX-License-Identifier: \
                              LicenseRef-SEL\nuse super::enterprise::UndeleteApi;\n// \
                              SPDX-SnippetEnd\n\npub trait ManageStore {}\n";

pub const MIXED_FILE_EXCISED: &str = "// SPDX-License-Identifier: AGPL-3.0-only OR \
                                      LicenseRef-SEL\n\nuse common::Server;\n\n\npub trait \
                                      ManageStore {}\n";

pub fn write(root: &Path, rel: &str, content: &str) {
	let path = root.join(rel);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)
			.unwrap_or_else(|e| panic!("create_dir_all {}: {e}", parent.display()));
	}
	std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
}

pub fn sample_tree(root: &Path) {
	write(root, "server/src/lib.rs", "pub mod store;\n");
	write(root, "server/src/store.rs", MIXED_FILE);
	write(root, "server/src/enterprise.rs", PROPRIETARY_FILE);
}
