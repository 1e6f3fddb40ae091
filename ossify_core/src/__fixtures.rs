//! Sample source files shaped like the ones found in a real mixed-license
//! tree.

pub fn proprietary_block_header() -> &'static str {
	"/*\n * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>\n *\n * \
	 SPDX-License-Identifier: LicenseRef-SEL\n *\n * This file is subject to the Stalwart \
	 Enterprise License Agreement (SEL).\n */\n\nuse std::sync::Arc;\n\npub struct \
	 Undelete;\n"
}

pub fn dual_licensed_block_header() -> &'static str {
	"/*\n * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>\n *\n * \
	 SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL\n */\n\nuse \
	 utils::url_params::UrlParams;\n"
}

pub fn proprietary_line_header() -> &'static str {
	"// SPDX-License-Identifier: LicenseRef-SEL\n// Copyright 2020 Stalwart Labs LLC\n// All \
	 rights reserved.\n\nfn enterprise() {}\n"
}

pub fn mixed_file() -> &'static str {
	"/*\n * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL\n */\n\nuse \
	 common::Server;\n\n// SPDX-SnippetBegin\n// SPDX-FileCopyrightText: 2020 Stalwart Labs \
	 LLC <hello@stalw.art>\n// SPDX-License-Identifier: LicenseRef-SEL\n#[cfg(feature = \
	 \"enterprise\")]\nuse super::enterprise::undelete::UndeleteApi;\n// \
	 SPDX-SnippetEnd\n\npub trait ManageStore {}\n"
}

pub fn mixed_file_excised() -> &'static str {
	"/*\n * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL\n */\n\nuse \
	 common::Server;\n\n\npub trait ManageStore {}\n"
}

pub fn two_snippets_one_licensed() -> &'static str {
	"fn start() {}\n    // SPDX-SnippetBegin\n    // SPDX-License-Identifier: MIT\n    fn \
	 open() {}\n    // SPDX-SnippetEnd\nfn middle() {}\n    // SPDX-SnippetBegin\n    // \
	 SPDX-License-Identifier: LicenseRef-SEL\n    fn closed() {}\n    // \
	 SPDX-SnippetEnd\nfn end() {}\n"
}
